//! Handlers for the `/user-roles` resource (notification recipients).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use plantwatch_core::error::CoreError;
use plantwatch_core::store::UserRole;
use plantwatch_pipeline::Registration;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /user-roles`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRoleRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 64, message = "role must be 1-64 characters"))]
    pub role: String,
}

impl CreateUserRoleRequest {
    /// Trim both fields and lowercase the email. Validation runs on the
    /// result, so a whitespace-only role is rejected.
    fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_lowercase(),
            role: self.role.trim().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/user-roles
///
/// Register a recipient and send them a welcome notification. The welcome
/// outcome is reported in the body; a failed welcome still returns 201.
pub async fn create_user_role(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRoleRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Registration>>)> {
    let Json(input) = payload?;
    let input = input.normalized();
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let registration = state.registry.register(&input.email, &input.role).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: registration }),
    ))
}

/// GET /api/v1/user-roles
pub async fn list_user_roles(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserRole>>>> {
    let users = state.registry.list().await?;
    Ok(Json(DataResponse { data: users }))
}
