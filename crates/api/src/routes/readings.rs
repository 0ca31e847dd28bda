use axum::routing::get;
use axum::Router;

use crate::handlers::readings;
use crate::state::AppState;

/// Routes mounted at `/readings`.
///
/// ```text
/// POST /    -> ingest_reading
/// GET  /    -> list_readings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(readings::list_readings).post(readings::ingest_reading),
    )
}
