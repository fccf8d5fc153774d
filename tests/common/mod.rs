// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use account_service::config::Config;
use account_service::db::AccountStore;
use account_service::routes::create_router;
use account_service::services::AccountService;
use account_service::AppState;
use axum::body::Body;
use axum::http::{header, Request};
use std::sync::Arc;

/// Create a test app backed by an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let store = AccountStore::in_memory()
        .await
        .expect("Failed to create in-memory store");

    let state = Arc::new(AppState {
        config,
        account_service: AccountService::new(store),
    });

    (create_router(state.clone()), state)
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not JSON")
}

/// A create payload that satisfies every constraint.
#[allow(dead_code)]
pub fn valid_create_payload(email: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": "Ama",
        "email": email,
        "password": "longpass1",
        "dateOfBirth": "1999-01-01"
    })
}
