//! Service layer error types

use thiserror::Error;

use crate::ports::outbound::{ApiError, StorageError};

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// The engine could not be reached or rejected the request
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Local persistence failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored data could not be read back
    #[error("Corrupt stored data: {0}")]
    Corrupt(String),

    #[error("Favorite {0} not found")]
    NotFound(charforge_domain::FavoriteId),
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
            || matches!(self, ServiceError::Api(e) if e.status_code() == Some(404))
    }
}
