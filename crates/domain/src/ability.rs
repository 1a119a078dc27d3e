//! The six ability scores and their derived modifiers.
//!
//! Scores and modifiers are always carried as fixed six-element arrays in
//! [`Ability::ALL`] order, so an index into one is an index into the other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of abilities on every character sheet.
pub const ABILITY_COUNT: usize = 6;

/// One of the six D&D-style abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// Fixed sheet order. Index `i` of scores and modifiers refers to `ALL[i]`.
    pub const ALL: [Ability; ABILITY_COUNT] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Modifier for a single score: `floor((score - 10) / 2)`.
///
/// Rust's `/` truncates toward zero, so a score of 9 would give 0 instead of -1.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// The six ability scores in [`Ability::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores([i32; ABILITY_COUNT]);

impl AbilityScores {
    pub fn new(scores: [i32; ABILITY_COUNT]) -> Self {
        Self(scores)
    }

    /// All tens; used when a stored record has lost its scores.
    pub fn neutral() -> Self {
        Self([10; ABILITY_COUNT])
    }

    pub fn get(&self, ability: Ability) -> i32 {
        self.0[ability as usize]
    }

    pub fn as_array(&self) -> &[i32; ABILITY_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }

    /// Arithmetic mean of the six scores.
    pub fn average(&self) -> f64 {
        f64::from(self.total()) / ABILITY_COUNT as f64
    }

    /// Modifiers derived from these scores.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers(self.0.map(ability_modifier))
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::neutral()
    }
}

impl From<[i32; ABILITY_COUNT]> for AbilityScores {
    fn from(value: [i32; ABILITY_COUNT]) -> Self {
        Self(value)
    }
}

/// The six ability modifiers, index-aligned with [`AbilityScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers([i32; ABILITY_COUNT]);

impl Modifiers {
    pub fn new(modifiers: [i32; ABILITY_COUNT]) -> Self {
        Self(modifiers)
    }

    pub fn get(&self, ability: Ability) -> i32 {
        self.0[ability as usize]
    }

    pub fn as_array(&self) -> &[i32; ABILITY_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(12), 1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(3), -4);
        assert_eq!(ability_modifier(18), 4);
        assert_eq!(ability_modifier(1), -5);
    }

    #[test]
    fn modifiers_follow_score_order() {
        let scores = AbilityScores::new([15, 14, 13, 12, 10, 8]);
        assert_eq!(scores.modifiers(), Modifiers::new([2, 2, 1, 1, 0, -1]));
        assert_eq!(scores.get(Ability::Constitution), 13);
        assert_eq!(scores.modifiers().get(Ability::Charisma), -1);
    }

    #[test]
    fn average_is_mean_of_scores() {
        let scores = AbilityScores::new([15, 14, 13, 12, 10, 8]);
        assert_eq!(scores.total(), 72);
        assert!((scores.average() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scores_serialize_as_plain_array() {
        let scores = AbilityScores::new([10, 11, 12, 13, 14, 15]);
        let json = serde_json::to_string(&scores).expect("serialize");
        assert_eq!(json, "[10,11,12,13,14,15]");

        let back: AbilityScores = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, scores);
    }

    #[test]
    fn ability_labels_match_sheet_order() {
        let labels: Vec<&str> = Ability::ALL.iter().map(Ability::label).collect();
        assert_eq!(
            labels,
            vec!["Strength", "Dexterity", "Constitution", "Intelligence", "Wisdom", "Charisma"]
        );
    }
}
