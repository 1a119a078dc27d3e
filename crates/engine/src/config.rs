//! Engine configuration from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;

/// Where favorites are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesBackend {
    JsonFile(PathBuf),
    Sqlite(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub favorites: FavoritesBackend,
    /// Comma-separated origins, or `*`; CORS is off when unset
    pub cors_allowed_origins: Option<String>,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; used by tests instead of the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|port| match port.trim().parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(port = %port, "SERVER_PORT is not a valid port, using default");
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        let backend = lookup("FAVORITES_BACKEND").unwrap_or_else(|| "json".into());
        let favorites = match backend.trim().to_ascii_lowercase().as_str() {
            "sqlite" => FavoritesBackend::Sqlite(
                lookup("FAVORITES_DB").unwrap_or_else(|| "favorites.db".into()),
            ),
            other => {
                if other != "json" {
                    tracing::warn!(backend = %other, "Unknown FAVORITES_BACKEND, using json");
                }
                FavoritesBackend::JsonFile(
                    lookup("FAVORITES_FILE")
                        .unwrap_or_else(|| "favorites.json".into())
                        .into(),
                )
            }
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            server_host,
            server_port,
            favorites,
            cors_allowed_origins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 5000);
        assert_eq!(
            config.favorites,
            FavoritesBackend::JsonFile(PathBuf::from("favorites.json"))
        );
        assert_eq!(config.cors_allowed_origins, None);
    }

    #[test]
    fn port_falls_back_to_port_var() {
        assert_eq!(config(&[("PORT", "8080")]).server_port, 8080);
        assert_eq!(
            config(&[("SERVER_PORT", "9000"), ("PORT", "8080")]).server_port,
            9000
        );
        assert_eq!(config(&[("SERVER_PORT", "nope")]).server_port, 5000);
    }

    #[test]
    fn sqlite_backend() {
        let config = config(&[("FAVORITES_BACKEND", "SQLite"), ("FAVORITES_DB", "/data/favs.db")]);
        assert_eq!(
            config.favorites,
            FavoritesBackend::Sqlite("/data/favs.db".into())
        );
    }

    #[test]
    fn blank_cors_is_disabled() {
        assert_eq!(config(&[("CORS_ALLOWED_ORIGINS", "  ")]).cors_allowed_origins, None);
    }
}
