//! `/api/v1/user-roles` registration and listing.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_app_with, build_test_app, get, post_json, RecordingSink};
use plantwatch_events::NotificationKind;
use plantwatch_pipeline::memory::{InMemorySensorStore, InMemoryUserRoleStore};
use serde_json::json;

#[tokio::test]
async fn register_returns_201_and_sends_welcome() {
    let app = build_test_app();

    let response = post_json(
        app.router.clone(),
        "/api/v1/user-roles",
        json!({ "email": "New@Plant.local", "role": "technician" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["email"], "new@plant.local");
    assert_eq!(json["data"]["welcome"]["kind"], "new_user");
    assert_eq!(json["data"]["welcome"]["outcomes"][0]["status"], "delivered");

    let sent = app.sink.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationKind::NewUser);
}

#[tokio::test]
async fn failed_welcome_still_registers() {
    let mut sink = RecordingSink::default();
    sink.failing.insert("new@plant.local".to_string());
    let app = build_app_with(
        Arc::new(InMemoryUserRoleStore::new()),
        Arc::new(InMemorySensorStore::new()),
        Arc::new(sink),
    );

    let response = post_json(
        app.router.clone(),
        "/api/v1/user-roles",
        json!({ "email": "new@plant.local", "role": "admin" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["welcome"]["outcomes"][0]["status"], "failed");

    let listed = body_json(get(app.router, "/api/v1/user-roles").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_email_returns_409() {
    let app = build_test_app();

    let response = post_json(
        app.router.clone(),
        "/api/v1/user-roles",
        json!({ "email": "tech@plant.local", "role": "admin" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
    assert!(app.sink.sent().is_empty());
}

#[tokio::test]
async fn invalid_email_or_blank_role_is_rejected() {
    let app = build_test_app();

    let bad_email = post_json(
        app.router.clone(),
        "/api/v1/user-roles",
        json!({ "email": "not-an-email", "role": "admin" }),
    )
    .await;
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(bad_email).await["code"], "VALIDATION_ERROR");

    let blank_role = post_json(
        app.router.clone(),
        "/api/v1/user-roles",
        json!({ "email": "ok@plant.local", "role": "" }),
    )
    .await;
    assert_eq!(blank_role.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn whitespace_only_role_is_rejected_without_welcome() {
    let app = build_test_app();

    let response = post_json(
        app.router.clone(),
        "/api/v1/user-roles",
        json!({ "email": "new@plant.local", "role": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(app.sink.sent().is_empty());

    let listed = body_json(get(app.router, "/api/v1/user-roles").await).await;
    let users = listed["data"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.iter().all(|u| u["email"] != "new@plant.local"));
}

#[tokio::test]
async fn padded_fields_are_trimmed_before_storing() {
    let app = build_test_app();

    let response = post_json(
        app.router.clone(),
        "/api/v1/user-roles",
        json!({ "email": "  Pad@Plant.local ", "role": " electrician " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["email"], "pad@plant.local");
    assert_eq!(json["data"]["user"]["role"], "electrician");
}

#[tokio::test]
async fn registered_user_receives_later_alerts() {
    let app = build_test_app();
    post_json(
        app.router.clone(),
        "/api/v1/user-roles",
        json!({ "email": "night@plant.local", "role": "electrician" }),
    )
    .await;

    post_json(
        app.router.clone(),
        "/api/v1/readings",
        json!({
            "water_level": 85.0,
            "caustic_soda_level": 1.5,
            "water_temperature": 50.0,
            "caustic_soda_temperature": 60.0,
            "voltage": 5.0
        }),
    )
    .await;

    let alerted: Vec<String> = app
        .sink
        .sent()
        .into_iter()
        .filter(|n| n.kind != NotificationKind::NewUser)
        .map(|n| n.recipient)
        .collect();
    assert!(alerted.contains(&"night@plant.local".to_string()));
    assert_eq!(alerted.len(), 3);
}

#[tokio::test]
async fn list_returns_seeded_users() {
    let app = build_test_app();
    let json = body_json(get(app.router, "/api/v1/user-roles").await).await;
    let users = json["data"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["email"], "tech@plant.local");
    assert_eq!(users[0]["role"], "technician");
}
