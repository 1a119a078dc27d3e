//! Response bodies of the engine HTTP API.

use charforge_domain::FavoriteId;
use serde::{Deserialize, Serialize};

/// `{"ok": true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// `{"ok": true, "id": <favorite id>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFavoriteResponse {
    pub ok: bool,
    pub id: FavoriteId,
}

impl SaveFavoriteResponse {
    pub fn saved(id: FavoriteId) -> Self {
        Self { ok: true, id }
    }
}

/// `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_response_shape() {
        let json = serde_json::to_value(SaveFavoriteResponse::saved(FavoriteId::new(7))).expect("serialize");
        assert_eq!(json, json!({"ok": true, "id": 7}));
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("No character provided")).expect("serialize");
        assert_eq!(json, json!({"error": "No character provided"}));
    }
}
