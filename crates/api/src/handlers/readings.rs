//! Handlers for the `/readings` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use plantwatch_core::store::StoredReading;
use plantwatch_core::Reading;
use plantwatch_pipeline::IngestOutcome;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/readings
///
/// Evaluate, notify and persist one reading. A body with a missing or
/// non-numeric field is rejected before any processing.
pub async fn ingest_reading(
    State(state): State<AppState>,
    payload: Result<Json<Reading>, JsonRejection>,
) -> AppResult<Json<DataResponse<IngestOutcome>>> {
    let Json(reading) = payload?;
    let outcome = state.pipeline.ingest(reading).await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/readings
///
/// All persisted readings, oldest first.
pub async fn list_readings(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StoredReading>>>> {
    let readings = state.pipeline.readings().await?;
    Ok(Json(DataResponse { data: readings }))
}
