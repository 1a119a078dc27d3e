//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters move untyped JSON; the application layer wraps this in a typed
//! `Api` (see `application::api`) so services can be stored behind
//! `Arc<dyn RawApiPort>`.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
