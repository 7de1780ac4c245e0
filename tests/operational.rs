//! Health, readiness, and version routes.

mod common;

use axum::http::StatusCode;

use common::{get, test_app};

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ready_probes_the_database() {
    let app = test_app().await;

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn version_names_the_package() {
    let app = test_app().await;

    let (status, body) = get(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "rolodex");
    assert!(body["version"].as_str().is_some());
}
