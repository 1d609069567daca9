//! Mock Backend
//!
//! Serves the parts catalog and build store REST API from memory.

use anyhow::{Context, Result};
use rigforge_mock_backend::{create_router, AppState, Config, Storage};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rigforge_mock_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting mock backend");
    info!("Listening on {}", config.address());

    let mut storage = Storage::new();
    if config.seed_on_start {
        storage.seed();
    }

    let app = create_router(AppState::new(storage));

    let listener = tokio::net::TcpListener::bind(config.address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.address()))?;

    info!("Mock backend running on http://{}", config.address());

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
