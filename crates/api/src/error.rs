use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use plantwatch_core::error::CoreError;
use plantwatch_core::store::StoreError;
use plantwatch_pipeline::IngestError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, store and ingestion errors.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `plantwatch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error outside of ingestion (listing, registration).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The reading could not be persisted.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(err) | AppError::Ingest(IngestError::Storage(err)) => {
                classify_store_error(err)
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// Connection details never reach the client; they are logged instead.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        StoreError::Timeout(_) => {
            tracing::error!(error = %err, "Store timeout");
            (
                StatusCode::GATEWAY_TIMEOUT,
                "STORE_TIMEOUT",
                err.to_string(),
            )
        }
        StoreError::Unavailable(_) => {
            tracing::error!(error = %err, "Store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORE_UNAVAILABLE",
                "Storage is temporarily unavailable".to_string(),
            )
        }
    }
}

