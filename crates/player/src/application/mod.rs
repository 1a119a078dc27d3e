//! Application layer - services, the typed API wrapper and service errors

pub mod api;
pub mod error;
pub mod services;

pub use api::Api;
pub use error::ServiceError;
