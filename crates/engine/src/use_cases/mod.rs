//! Use cases: user stories orchestrated across ports and domain rules.

pub mod favorites;
pub mod generate;

pub use favorites::{FavoritesError, FavoritesOps};
pub use generate::GenerateCharacter;
