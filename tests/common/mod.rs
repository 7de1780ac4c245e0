//! Shared helpers: the real router over a fresh in-memory database.

#![allow(dead_code)]

use std::str::FromStr;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use rolodex::{app, init_schema, AppState};

/// Builds the application over its own in-memory database. A single pooled
/// connection keeps every query on the same :memory: instance.
pub async fn test_app() -> Router {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("sqlite options")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await
        .expect("connect test database");
    init_schema(&pool).await.expect("init schema");
    app(AppState { pool })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

/// Creates a customer, asserting success. Returns its id.
pub async fn seed_customer(app: &Router, first: &str, last: &str, phone: &str) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/customers",
        json!({ "first_name": first, "last_name": last, "phone_number": phone }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().expect("customer id")
}

/// Creates an address under a customer, asserting success. Returns its id.
pub async fn seed_address(
    app: &Router,
    customer_id: i64,
    details: &str,
    city: &str,
    state: &str,
    pin: &str,
) -> i64 {
    let (status, body) = post_json(
        app,
        &format!("/api/customers/{customer_id}/addresses"),
        json!({ "address_details": details, "city": city, "state": state, "pin_code": pin }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().expect("address id")
}
