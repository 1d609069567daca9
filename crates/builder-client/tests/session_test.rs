//! Session integration tests
//!
//! Starts the mock backend (or a canned axum router) on an ephemeral port and
//! drives the real HTTP client against it.

use axum::{routing::post, Json, Router};
use rigforge_client::{BackendClient, CatalogStatus, CatalogStore, Session};
use rigforge_common::{Error, Part, PartCategory, Selection};
use rigforge_mock_backend::{create_router, AppState, Storage};
use serde_json::json;
use std::time::Duration;

/// Bind to port 0 and return the base URL
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_backend(storage: Storage) -> (String, AppState) {
    let state = AppState::new(storage);
    let base = serve(create_router(state.clone())).await;
    (base, state)
}

fn small_catalog() -> Vec<Part> {
    vec![
        Part::new("c1", PartCategory::Cpu, "Ryzen 5", 199.0)
            .with_attribute("socket", "AM5")
            .with_attribute("power", 65),
        Part::new("g1", PartCategory::Gpu, "RTX 4070", 549.0).with_attribute("power", 200),
    ]
}

#[tokio::test]
async fn test_startup_seeds_empty_backend_once() {
    let (base, state) = start_backend(Storage::new()).await;
    let mut session = Session::new(BackendClient::new(base.clone()));

    session.start().await.unwrap();

    assert_eq!(session.catalog().status(), CatalogStatus::Ready);
    assert!(!session.catalog().is_empty());
    assert_eq!(state.storage.lock().await.seed_requests(), 1);

    // Catalog is populated now: no further seed requests
    session.start().await.unwrap();
    CatalogStore::ensure_seeded(&BackendClient::new(base)).await;
    assert_eq!(state.storage.lock().await.seed_requests(), 1);
}

#[tokio::test]
async fn test_populated_backend_is_never_seeded() {
    let (base, state) = start_backend(Storage::with_parts(small_catalog())).await;

    CatalogStore::ensure_seeded(&BackendClient::new(base)).await;

    assert_eq!(state.storage.lock().await.seed_requests(), 0);
    assert_eq!(state.storage.lock().await.list_parts().len(), 2);
}

#[tokio::test]
async fn test_catalog_lookup_after_refresh() {
    let (base, _state) = start_backend(Storage::with_parts(small_catalog())).await;
    let client = BackendClient::new(base);
    let mut catalog = CatalogStore::new();

    catalog.refresh(&client).await.unwrap();

    let cpu = catalog.find_by_id("c1").unwrap();
    assert_eq!(cpu.name, "Ryzen 5");
    assert_eq!(cpu.attr_str("socket"), Some("AM5"));
    assert_eq!(catalog.by_category(PartCategory::Gpu).count(), 1);
}

#[tokio::test]
async fn test_save_replaces_summary_with_server_result() {
    let app = Router::new().route(
        "/api/builds",
        post(|| async {
            Json(json!({
                "total_price": 199,
                "total_power": 65,
                "compatibility": { "socket": "OK" }
            }))
        })
        .get(|| async { Json(json!([])) }),
    );
    let base = serve(app).await;

    let mut session = Session::new(BackendClient::new(base));
    session.select(PartCategory::Cpu, Some("c1".to_string()));

    session.save_build("Rig").await.unwrap();

    let summary = session.summary();
    assert_eq!(summary.total_price, 199.0);
    assert_eq!(summary.total_power, 65);
    assert_eq!(summary.compatibility.len(), 1);
    assert_eq!(summary.compatibility[0].check, "socket");
    assert_eq!(summary.compatibility[0].verdict.as_str(), "OK");
    assert!(summary.compatibility[0].passing());
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let (base, _state) = start_backend(Storage::with_parts(small_catalog())).await;
    let mut session = Session::new(BackendClient::new(base));
    session.start().await.unwrap();

    session.select(PartCategory::Cpu, Some("c1".to_string()));
    session.select(PartCategory::Gpu, Some("g1".to_string()));
    let response = session.save_build("Rig").await.unwrap();

    assert_eq!(response.summary.total_price, 748.0);
    assert_eq!(response.summary.total_power, 265);
    assert_eq!(session.saved_builds().len(), 1);

    let saved = session.saved_builds().builds()[0].clone();
    assert_eq!(Some(saved.id.as_str()), response.id.as_deref());

    // Edit the selection, then load the saved build back
    session.select(PartCategory::Cpu, None);
    session.select(PartCategory::Case, Some("k1".to_string()));
    session.load_build(&saved);

    let expected = Selection::new()
        .with(PartCategory::Cpu, "c1")
        .with(PartCategory::Gpu, "g1");
    assert_eq!(session.selection(), &expected);

    // Loading does not touch the displayed totals
    assert_eq!(session.summary().total_price, 748.0);
}

#[tokio::test]
async fn test_failed_save_keeps_previous_summary() {
    let (base, state) = start_backend(Storage::with_parts(small_catalog())).await;
    let mut session = Session::new(BackendClient::new(base));
    session.start().await.unwrap();

    session.select(PartCategory::Cpu, Some("c1".to_string()));
    session.save_build("Rig").await.unwrap();
    let before = session.summary();

    session.select(PartCategory::Gpu, Some("g1".to_string()));
    let err = session.save_build("").await.unwrap_err();

    assert!(matches!(err, Error::BuildSaveFailure(_)));
    assert!(err.to_string().contains("400"));
    assert_eq!(session.summary().total_price, before.total_price);
    assert_eq!(session.summary().total_power, before.total_power);
    assert_eq!(session.selection().get(PartCategory::Gpu), Some("g1"));
    assert_eq!(state.storage.lock().await.count_builds(), 1);
}

#[tokio::test]
async fn test_saved_builds_listed_most_recent_first() {
    let (base, _state) = start_backend(Storage::with_parts(small_catalog())).await;
    let mut session = Session::new(BackendClient::new(base));
    session.start().await.unwrap();
    assert!(session.saved_builds().is_loaded());
    assert!(session.saved_builds().is_empty());

    session.select(PartCategory::Cpu, Some("c1".to_string()));
    session.save_build("First").await.unwrap();
    session.select(PartCategory::Gpu, Some("g1".to_string()));
    session.save_build("Second").await.unwrap();

    let names: Vec<_> = session
        .saved_builds()
        .builds()
        .iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[tokio::test]
async fn test_summary_resolves_against_live_catalog() {
    let (base, _state) = start_backend(Storage::with_parts(small_catalog())).await;
    let mut session = Session::new(BackendClient::new(base));
    session.start().await.unwrap();

    session.select(PartCategory::Cpu, Some("c1".to_string()));
    session.select(PartCategory::Ram, Some("not-in-catalog".to_string()));

    let summary = session.summary();
    let cpu = summary.slot(PartCategory::Cpu).unwrap();
    assert_eq!(cpu.part.as_ref().unwrap().name, "Ryzen 5");
    assert_eq!(cpu.part.as_ref().unwrap().price, 199.0);
    assert!(summary.slot(PartCategory::Ram).unwrap().part.is_none());
    assert!(summary.is_unconfirmed());
}

#[tokio::test]
async fn test_manual_refresh_recovers_after_backend_comes_up() {
    // Reserve a port, then leave it closed so the first start fails
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        BackendClient::with_timeout(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    let mut session = Session::new(client);
    session.select(PartCategory::Cpu, Some("c1".to_string()));

    let err = session.start().await.unwrap_err();
    assert!(matches!(err, Error::CatalogUnavailable(_)));
    assert_eq!(session.catalog().status(), CatalogStatus::Error);
    assert!(session.catalog().last_error().is_some());
    assert!(session.saved_builds().is_stale());
    assert_eq!(session.selection().get(PartCategory::Cpu), Some("c1"));

    // Backend comes up on the same address
    let state = AppState::new(Storage::with_parts(small_catalog()));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let app = create_router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    session.refresh_catalog().await.unwrap();
    session.refresh_saved_builds().await.unwrap();

    assert_eq!(session.catalog().status(), CatalogStatus::Ready);
    assert!(session.catalog().last_error().is_none());
    assert_eq!(session.catalog().len(), 2);
    assert!(!session.saved_builds().is_stale());
    assert!(session.saved_builds().is_loaded());
    assert_eq!(session.selection().get(PartCategory::Cpu), Some("c1"));
    assert_eq!(
        session.summary().slot(PartCategory::Cpu).unwrap().display_value(),
        "Ryzen 5 ($199)"
    );
}

#[tokio::test]
async fn test_health_check_against_mock_backend() {
    let (base, _state) = start_backend(Storage::new()).await;

    assert!(BackendClient::new(base).health_check().await.unwrap());
}
