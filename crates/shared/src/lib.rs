//! Charforge Protocol - Shared types for Engine and Player communication
//!
//! This crate contains the types both sides of the HTTP API agree on:
//! - Request and response bodies
//! - Route paths
//! - Pronoun presets offered by the player
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain crate
//! 2. **No business logic** - Pure data types and serialization

pub mod api;
pub mod pronouns;
pub mod responses;

pub use api::{routes, GenerateRequest, SaveFavoriteRequest};
pub use pronouns::{PronounChoice, PronounPreset, PRONOUN_PRESETS};
pub use responses::{ErrorResponse, OkResponse, SaveFavoriteResponse};
