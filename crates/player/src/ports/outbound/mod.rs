//! Outbound ports - Interfaces for external services
//!
//! Infrastructure adapters implement these so application services never
//! depend on reqwest, the filesystem or the system clock directly.

pub mod api_port;
pub mod platform;
pub mod raw_api_port;

pub use api_port::ApiError;
pub use platform::{storage_keys, RandomProvider, StorageError, StorageProvider, TimeProvider};
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
