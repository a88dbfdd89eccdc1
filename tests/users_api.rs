// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User endpoint tests.

use axum::http::StatusCode;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(common::get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_then_list_users() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_form("/api/users", "username=alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = common::json_body(response).await;
    assert_eq!(created["username"], "alice");
    assert!(!created["id"].as_str().unwrap().is_empty());

    let response = app.oneshot(common::get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = common::json_body(response).await;
    let users = listed.as_array().expect("array of users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "alice");
    assert!(!users[0]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_users_empty_store_is_empty_array() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(common::get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_user_with_missing_username() {
    let (app, _state) = common::create_test_app();

    // No username field at all: coerces to the empty string, no
    // validation is applied.
    let response = app
        .oneshot(common::post_form("/api/users", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(body["username"], "");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_usernames_are_allowed() {
    let (app, _state) = common::create_test_app();

    let first = common::create_user(&app, "bob").await;
    let second = common::create_user(&app, "bob").await;
    assert_ne!(first, second);

    let response = app.oneshot(common::get("/api/users")).await.unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
