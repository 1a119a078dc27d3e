//! Charforge Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_engine::{
    api,
    config::{EngineConfig, FavoritesBackend},
    infrastructure::{
        clock::{SystemClock, SystemRandom},
        favorites_file::JsonFileFavoritesRepo,
        favorites_sqlite::SqliteFavoritesRepo,
        ports::FavoritesRepo,
    },
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine is often run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Charforge Engine");

    let config = EngineConfig::from_env();

    let favorites: Arc<dyn FavoritesRepo> = match &config.favorites {
        FavoritesBackend::JsonFile(path) => {
            tracing::info!(path = %path.display(), "Using JSON file favorites store");
            Arc::new(JsonFileFavoritesRepo::new(path).await?)
        }
        FavoritesBackend::Sqlite(db_path) => {
            tracing::info!(db = %db_path, "Using SQLite favorites store");
            Arc::new(SqliteFavoritesRepo::new(db_path).await?)
        }
    };

    let app = Arc::new(App::new(
        favorites,
        Arc::new(SystemClock::new()),
        Arc::new(SystemRandom::new()),
    ));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = config
        .cors_allowed_origins
        .as_deref()
        .and_then(api::cors_layer)
    {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
