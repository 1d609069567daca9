//! Integration tests for the mock backend API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rigforge_mock_backend::{create_router, AppState, Storage};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

fn create_test_app() -> (Router, AppState) {
    let state = AppState::new(Storage::new());
    (create_router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = create_test_app();

    let (status, json) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "rigforge-mock-backend");
}

#[tokio::test]
async fn test_components_empty_until_seeded() {
    let (app, state) = create_test_app();

    let (status, json) = send(&app, get("/api/components")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let seed = Request::builder()
        .uri("/api/components/seed")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, seed).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["seeded"], true);

    let (_, json) = send(&app, get("/api/components")).await;
    let parts = json.as_array().unwrap();
    assert!(!parts.is_empty());
    assert!(parts.iter().all(|p| p["id"].is_string() && p["type"].is_string()));

    assert_eq!(state.storage.lock().await.seed_requests(), 1);
}

#[tokio::test]
async fn test_create_and_list_builds() {
    let (app, state) = create_test_app();
    state.storage.lock().await.seed();

    let (status, created) = send(
        &app,
        post_json(
            "/api/builds",
            json!({
                "name": "Rig",
                "cpu_id": "cpu-r5-7600",
                "motherboard_id": "mb-b650",
                "ram_id": null,
                "gpu_id": null,
                "storage_id": null,
                "psu_id": null,
                "case_id": null
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].is_string());
    assert_eq!(created["total_price"], 418.0);
    assert_eq!(created["total_power"], 115);
    assert_eq!(created["compatibility"]["socket"], "OK");

    let (status, listed) = send(&app, get("/api/builds")).await;
    assert_eq!(status, StatusCode::OK);
    let builds = listed.as_array().unwrap();
    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0]["id"], created["id"]);
    assert_eq!(builds[0]["cpu_id"], "cpu-r5-7600");
    assert!(builds[0]["gpu_id"].is_null());
}

#[tokio::test]
async fn test_create_build_rejects_empty_name() {
    let (app, state) = create_test_app();

    let (status, json) = send(
        &app,
        post_json("/api/builds", json!({ "name": "  ", "cpu_id": "c1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("name"));
    assert_eq!(state.storage.lock().await.count_builds(), 0);
}
