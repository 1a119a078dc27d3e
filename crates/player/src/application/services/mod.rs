//! Application services
//!
//! Services talk to the engine through the typed `Api` wrapper and to the
//! local machine through platform providers, never to adapters directly.

pub mod favorites;
pub mod generator_service;

pub use favorites::{FavoritesPort, LocalFavoritesStore, RemoteFavoritesStore};
pub use generator_service::{GenerateForm, GeneratorService};

#[cfg(test)]
pub use favorites::MockFavoritesPort;
