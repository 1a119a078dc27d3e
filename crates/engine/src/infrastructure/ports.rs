//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Favorites storage (JSON file or SQLite)
//! - Clock/Random (for testing)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use charforge_domain::{CharacterRecord, FavoriteId};
use serde_json::Value;

// =============================================================================
// Error Types
// =============================================================================

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Reading or writing the backing file failed.
    #[error("I/O error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

// =============================================================================
// Favorites Storage
// =============================================================================

/// Persistent list of favorite characters.
///
/// Records come back as raw JSON so callers can re-validate what was stored
/// by older versions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritesRepo: Send + Sync {
    /// All stored favorites, oldest first.
    async fn list(&self) -> Result<Vec<Value>, RepoError>;

    /// Store a record under the next free id (`max(now_ms, newest + 1)`).
    ///
    /// Id assignment and the write happen under one lock or transaction.
    async fn add(&self, record: CharacterRecord, now_ms: i64)
        -> Result<CharacterRecord, RepoError>;

    /// Remove a favorite. Returns whether anything was removed.
    async fn delete(&self, id: FavoriteId) -> Result<bool, RepoError>;
}

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Inclusive random integers.
pub trait RandomPort: Send + Sync {
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
