//! Platform abstraction ports
//!
//! These traits keep clocks, randomness and key-value persistence out of the
//! application layer so services can be driven by fixed values in tests.

use thiserror::Error;

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Random number generation abstraction
pub trait RandomProvider: Clone + 'static {
    /// Generate random i32 in range [min, max] (inclusive)
    fn random_range(&self, min: i32, max: i32) -> i32;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage I/O failed during {operation}: {message}")]
    Io { operation: String, message: String },

    #[error("Storage lock poisoned")]
    Poisoned,
}

impl StorageError {
    pub fn io(operation: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            operation: operation.into(),
            message: err.to_string(),
        }
    }
}

/// Persistent key-value storage (a JSON file on desktop)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value under the given key
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key constants
pub mod storage_keys {
    /// The whole favorites list, as one JSON array
    pub const FAVORITES: &str = "charforge_favorites";
}
