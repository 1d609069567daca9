//! Mock Backend
//!
//! In-memory stand-in for the parts catalog and build store. Serves the same
//! REST surface the client talks to so it can be exercised locally and in
//! integration tests without a real backend.
//!
//! ## Endpoints
//!
//! - `GET /api/components` - List catalog parts
//! - `POST /api/components/seed` - Install the demo catalog if empty
//! - `GET /api/builds` - List saved builds, most recent first
//! - `POST /api/builds` - Save a build and return its computed summary
//! - `GET /health` - Health check

pub mod compatibility;
pub mod config;
pub mod demo_catalog;
pub mod handlers;
pub mod models;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use handlers::AppState;
pub use models::StoredBuild;
pub use storage::Storage;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/components", get(handlers::list_components_handler))
        .route("/api/components/seed", post(handlers::seed_components_handler))
        .route(
            "/api/builds",
            get(handlers::list_builds_handler).post(handlers::create_build_handler),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
