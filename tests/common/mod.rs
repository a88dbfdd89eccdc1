// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use fitlog::config::Config;
use fitlog::db::Db;
use fitlog::routes::create_router;
use fitlog::services::{ExerciseLedger, UserDirectory};
use fitlog::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let db = Db::new_in_memory();
    let directory = UserDirectory::new(db.clone());
    let ledger = ExerciseLedger::new(db.clone(), directory.clone());

    let state = Arc::new(AppState {
        config,
        db,
        directory,
        ledger,
    });

    (create_router(state.clone()), state)
}

/// Build a form-encoded POST request.
#[allow(dead_code)]
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request.
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Create a user through the API and return its generated id.
#[allow(dead_code)]
pub async fn create_user(app: &axum::Router, username: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_form("/api/users", &format!("username={}", username)))
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body = json_body(response).await;
    body["id"].as_str().expect("user id").to_string()
}
