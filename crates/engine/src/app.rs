//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, FavoritesRepo, RandomPort};
use crate::use_cases;

/// Main application state.
///
/// Holds all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub generate: use_cases::GenerateCharacter,
    pub favorites: use_cases::FavoritesOps,
}

impl App {
    pub fn new(
        favorites: Arc<dyn FavoritesRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            use_cases: UseCases {
                generate: use_cases::GenerateCharacter::new(random),
                favorites: use_cases::FavoritesOps::new(favorites, clock),
            },
        }
    }
}
