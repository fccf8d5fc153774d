// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end tests for the account lifecycle.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/users",
            &common::valid_create_payload("ama@example.com"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = common::body_json(response).await;
    assert_eq!(created["firstName"], "Ama");
    assert_eq!(created["email"], "ama@example.com");
    assert_eq!(created["dateOfBirth"], "1999-01-01");
    assert_eq!(created["verificationStatus"], "UNVERIFIED");
    assert!(created.get("password").is_none());

    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/users/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = common::body_json(response).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["email"], "ama@example.com");
}

#[tokio::test]
async fn test_list_accounts() {
    let (app, _state) = common::create_test_app().await;

    for email in ["first@example.com", "second@example.com"] {
        let response = app
            .clone()
            .oneshot(common::json_request(
                "POST",
                "/users",
                &common::valid_create_payload(email),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let accounts = common::body_json(response).await;
    let accounts = accounts.as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0]["email"], "first@example.com");
    assert_eq!(accounts[1]["email"], "second@example.com");
}

#[tokio::test]
async fn test_partial_update_overwrites_only_supplied_fields() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/users",
            &serde_json::json!({
                "firstName": "Ama",
                "lastName": "Owusu",
                "email": "ama@example.com",
                "password": "longpass1",
                "phoneNumber": "0241234567",
                "dateOfBirth": "1999-01-01"
            }),
        ))
        .await
        .unwrap();
    let created = common::body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PATCH",
            &format!("/users/{id}"),
            &serde_json::json!({ "lastName": "Mensah" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = common::body_json(response).await;
    assert_eq!(updated["lastName"], "Mensah");
    assert_eq!(updated["firstName"], "Ama");
    assert_eq!(updated["phoneNumber"], "0241234567");
    assert_eq!(updated["email"], "ama@example.com");
    assert_eq!(updated["id"], id);
}

#[tokio::test]
async fn test_update_merges_nested_profile() {
    let (app, _state) = common::create_test_app().await;

    let mut payload = common::valid_create_payload("ama@example.com");
    payload["profile"] = serde_json::json!({
        "bio": "Original bio",
        "companyName": "Acme Ltd"
    });
    let response = app
        .clone()
        .oneshot(common::json_request("POST", "/users", &payload))
        .await
        .unwrap();
    let created = common::body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(common::json_request(
            "PATCH",
            &format!("/users/{id}"),
            &serde_json::json!({ "profile": { "bio": "Updated bio" } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = common::body_json(response).await;
    assert_eq!(updated["profile"]["bio"], "Updated bio");
    // Sibling profile field survives the nested partial update.
    assert_eq!(updated["profile"]["companyName"], "Acme Ltd");
}

#[tokio::test]
async fn test_delete_then_fetch_is_not_found() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/users",
            &common::valid_create_payload("ama@example.com"),
        ))
        .await
        .unwrap();
    let created = common::body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/users/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/users/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again is NotFound, not success.
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/users/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/users/7c9e6679-7425-40de-944b-e07fc1f90ae7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = common::body_json(response).await;
    // The offending id appears in the message.
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("7c9e6679-7425-40de-944b-e07fc1f90ae7"));
}

#[tokio::test]
async fn test_malformed_id_rejected_before_lookup() {
    let (app, _state) = common::create_test_app().await;

    for method in ["GET", "DELETE"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/users/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");
    }

    let response = app
        .oneshot(common::json_request(
            "PATCH",
            "/users/not-a-uuid",
            &serde_json::json!({ "firstName": "Kofi" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
}
