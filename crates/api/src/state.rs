use std::sync::Arc;

use plantwatch_pipeline::{IngestionPipeline, UserRegistry};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything sits behind an `Arc` or is a pool handle.
/// Handlers never see the concrete stores, so the same router runs over
/// Postgres or memory.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Reading intake: evaluation, dispatch and persistence.
    pub pipeline: Arc<IngestionPipeline>,
    /// Recipient registration.
    pub registry: Arc<UserRegistry>,
    /// Database pool, `None` when running on in-memory stores.
    pub pool: Option<plantwatch_db::DbPool>,
}
