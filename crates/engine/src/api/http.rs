//! HTTP routes.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use charforge_domain::{CharacterRecord, FavoriteId};
use charforge_shared::{
    routes as paths, ErrorResponse, GenerateRequest, OkResponse, SaveFavoriteRequest,
    SaveFavoriteResponse,
};
use std::sync::Arc;

use crate::app::App;
use crate::use_cases::FavoritesError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route(paths::HEALTH, get(health))
        .route(paths::GENERATE, post(generate))
        .route(paths::FAVORITES, get(list_favorites).post(add_favorite))
        .route("/api/favorites/{id}", delete(delete_favorite))
}

async fn health() -> &'static str {
    "OK"
}

/// The body is optional. Each field is read on its own; a body that is not a
/// JSON object generates with defaults.
async fn generate(State(app): State<Arc<App>>, body: Bytes) -> Json<CharacterRecord> {
    let request: GenerateRequest = if body.is_empty() {
        GenerateRequest::default()
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Unreadable generate request, using defaults");
            GenerateRequest::default()
        })
    };
    Json(app.use_cases.generate.execute(request.into()))
}

// =============================================================================
// Favorites
// =============================================================================

async fn list_favorites(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<CharacterRecord>>, ApiError> {
    let favorites = app.use_cases.favorites.list().await?;
    Ok(Json(favorites))
}

async fn add_favorite(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<Json<SaveFavoriteResponse>, ApiError> {
    let request: SaveFavoriteRequest = serde_json::from_slice(&body).unwrap_or_default();
    let id = app.use_cases.favorites.save(request.character).await?;
    Ok(Json(SaveFavoriteResponse::saved(id)))
}

async fn delete_favorite(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    let id: FavoriteId = id.parse().map_err(|_| ApiError::NotFound)?;
    app.use_cases.favorites.delete(id).await?;
    Ok(Json(OkResponse::ok()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<FavoritesError> for ApiError {
    fn from(e: FavoritesError) -> Self {
        match e {
            FavoritesError::MissingCharacter => ApiError::BadRequest(e.to_string()),
            FavoritesError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}
