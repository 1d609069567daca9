//! API request handlers for the mock backend

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rigforge_common::{CreateBuildRequest, Part};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    models::{SeedResponse, StoredBuild},
    storage::Storage,
};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub storage: Arc<Mutex<Storage>>,
}

impl AppState {
    /// Wrap a storage instance
    pub fn new(storage: Storage) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }
}

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "rigforge-mock-backend"
    }))
}

/// List every part in the catalog
pub async fn list_components_handler(State(state): State<AppState>) -> Json<Vec<Part>> {
    let storage = state.storage.lock().await;
    Json(storage.list_parts().to_vec())
}

/// Install the demo catalog when the catalog is empty
pub async fn seed_components_handler(State(state): State<AppState>) -> Json<SeedResponse> {
    let mut storage = state.storage.lock().await;
    let seeded = storage.seed();

    Json(SeedResponse {
        seeded,
        total: storage.list_parts().len(),
    })
}

/// List saved builds, most recent first
pub async fn list_builds_handler(State(state): State<AppState>) -> Json<Vec<StoredBuild>> {
    let storage = state.storage.lock().await;
    Json(storage.list_builds())
}

/// Save a build and return it with its computed summary
pub async fn create_build_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateBuildRequest>,
) -> Result<Json<StoredBuild>, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "Build name must not be empty".to_string(),
        });
    }

    info!("Saving build: {}", payload.name);

    let mut storage = state.storage.lock().await;
    let stored = storage.insert_build(payload);

    Ok(Json(stored))
}
