//! `AppError` to HTTP response mapping, without a server.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use plantwatch_api::error::AppError;
use plantwatch_core::error::CoreError;
use plantwatch_core::store::StoreError;
use plantwatch_pipeline::IngestError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("voltage is NaN".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "voltage is NaN");
}

#[tokio::test]
async fn conflict_returns_409_with_message() {
    let (status, json) =
        error_to_response(AppError::Store(StoreError::Conflict("duplicate email".into()))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "duplicate email");
}

#[tokio::test]
async fn unavailable_store_hides_details() {
    let (status, json) = error_to_response(AppError::Ingest(IngestError::Storage(
        StoreError::Unavailable("password authentication failed for user".into()),
    )))
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert!(!json["error"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn store_timeout_returns_504() {
    let (status, json) =
        error_to_response(AppError::Store(StoreError::Timeout(Duration::from_secs(2)))).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["code"], "STORE_TIMEOUT");
}
