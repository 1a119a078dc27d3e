//! HTTP entry points.

pub mod http;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// CORS layer for the configured origins: `*` or a comma-separated list.
///
/// Returns `None` when no valid origin is configured.
pub fn cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        // JSON bodies trigger CORS preflights.
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins.trim() == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(cors.allow_origin(origins))
}
