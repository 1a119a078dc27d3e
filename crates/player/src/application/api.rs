//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and converts request and response
//! bodies with serde_json, so services work with typed DTOs while the
//! composition root stores an object-safe adapter.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let value = self.post_raw(path, body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// POST with a typed body, returning the untyped response.
    pub async fn post_raw<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        self.raw.post_json(path, &body_value).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.raw.delete(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use charforge_shared::OkResponse;
    use serde_json::json;

    #[tokio::test]
    async fn parse_failure_is_reported() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({"unexpected": true})));

        let api = Api::new(Arc::new(raw));
        let err = api.get::<Vec<Value>>("/api/favorites").await.expect_err("not a list");
        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn post_serializes_body() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == "/api/x" && body == &json!({"a": 1}))
            .returning(|_, _| Ok(json!({"ok": true})));

        let api = Api::new(Arc::new(raw));
        let response: OkResponse = api.post("/api/x", &json!({"a": 1})).await.expect("post");
        assert!(response.ok);
    }
}
