//! Charforge domain: the character record and every rule that shapes it.
//!
//! Pure code only. Randomness is injected as a `roll(min, max)` closure with
//! inclusive bounds, and nothing here performs I/O.

pub mod ability;
pub mod builder;
pub mod character;
pub mod dice;
pub mod equipment;
pub mod error;
pub mod format;
pub mod ids;
pub mod lenient;
pub mod money;
pub mod normalizer;
pub mod stat_method;
pub mod tables;

pub use ability::{ability_modifier, Ability, AbilityScores, Modifiers, ABILITY_COUNT};
pub use builder::{build_character, CharacterRequest, DEFAULT_PRONOUNS};
pub use character::CharacterRecord;
pub use dice::{DiceFormula, DiceRollResult};
pub use equipment::{EquipmentItem, StructuredItem};
pub use error::DomainError;
pub use format::{coin_lines, equipment_to_string, format_modifier, format_money};
pub use ids::FavoriteId;
pub use money::{Coins, Money};
pub use normalizer::{normalize, revalidate, revalidate_derived, Normalized, Repair, RepairReport};
pub use stat_method::StatMethod;
