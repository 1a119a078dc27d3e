//! reqwest adapter for the engine's JSON API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Default engine base URL for local development.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:5000";

#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: Url,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }
}

/// Fail on non-2xx, keeping the response text for the log.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::status(status.as_u16(), body))
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::ParseError(e.to_string()))
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path)?)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path)?)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(path)?)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }
}
