//! Request bodies and route paths of the engine HTTP API.

use charforge_domain::{lenient, CharacterRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Route paths, relative to the engine base URL.
pub mod routes {
    pub const GENERATE: &str = "/api/generate";
    pub const FAVORITES: &str = "/api/favorites";
    pub const HEALTH: &str = "/api/health";

    /// Path of a single favorite.
    pub fn favorite(id: impl std::fmt::Display) -> String {
        format!("{FAVORITES}/{id}")
    }
}

/// Body of `POST /api/generate`. Every field is optional, and a field of the
/// wrong shape is dropped on its own without losing the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// "4d6", "standard" or "pointbuy"
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl GenerateRequest {
    pub fn with_method(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            ..Self::default()
        }
    }
}

impl From<GenerateRequest> for CharacterRequest {
    fn from(request: GenerateRequest) -> Self {
        Self {
            name: request.name,
            pronouns: request.pronouns,
            gender: request.gender,
            method: request.method,
        }
    }
}

/// Body of `POST /api/favorites`.
///
/// The character is kept as raw JSON: the engine normalizes it before storing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveFavoriteRequest {
    #[serde(default)]
    pub character: Option<Value>,
}

impl SaveFavoriteRequest {
    pub fn new(character: Value) -> Self {
        Self {
            character: Some(character),
        }
    }
}
