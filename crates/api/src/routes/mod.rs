pub mod health;
pub mod readings;
pub mod user_roles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /readings                 ingest (POST), list (GET)
/// /user-roles               register (POST), list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/readings", readings::router())
        .nest("/user-roles", user_roles::router())
}
