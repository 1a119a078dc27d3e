//! Pronoun presets offered when generating a character.

use charforge_domain::{DomainError, DEFAULT_PRONOUNS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PronounPreset {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PRONOUN_PRESETS: [PronounPreset; 4] = [
    PronounPreset { label: "They/Them", value: "they/them" },
    PronounPreset { label: "She/Her", value: "she/her" },
    PronounPreset { label: "He/Him", value: "he/him" },
    PronounPreset { label: "Custom", value: "custom" },
];

/// A pronoun selection, with free text for [`PronounChoice::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PronounChoice {
    #[default]
    #[serde(rename = "they/them")]
    TheyThem,
    #[serde(rename = "she/her")]
    SheHer,
    #[serde(rename = "he/him")]
    HeHim,
    #[serde(rename = "custom")]
    Custom,
}

impl PronounChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TheyThem => "they/them",
            Self::SheHer => "she/her",
            Self::HeHim => "he/him",
            Self::Custom => "custom",
        }
    }

    /// Pronouns to send with a generate request.
    ///
    /// A custom choice uses the trimmed custom text and falls back to
    /// "they/them" when that is blank.
    pub fn resolve(&self, custom: Option<&str>) -> String {
        match self {
            Self::Custom => custom
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_PRONOUNS)
                .to_string(),
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PronounChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PronounChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "they/them" | "they" => Ok(Self::TheyThem),
            "she/her" | "she" => Ok(Self::SheHer),
            "he/him" | "he" => Ok(Self::HeHim),
            "custom" => Ok(Self::Custom),
            other => Err(DomainError::parse(format!("Unknown pronoun preset: {other}"))),
        }
    }
}
