use axum::routing::get;
use axum::Router;

use crate::handlers::user_roles;
use crate::state::AppState;

/// Routes mounted at `/user-roles`.
///
/// ```text
/// POST /    -> create_user_role
/// GET  /    -> list_user_roles
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(user_roles::list_user_roles).post(user_roles::create_user_role),
    )
}
