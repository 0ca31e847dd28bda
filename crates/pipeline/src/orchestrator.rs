//! Per-reading ingestion.
//!
//! [`IngestionPipeline::ingest`] persists a reading while it evaluates the
//! reading and dispatches notifications. Persistence happens exactly once
//! per accepted reading regardless of how delivery goes; only a storage
//! failure is reported to the caller as an error.

use std::sync::Arc;

use futures::future::join_all;
use plantwatch_core::store::{SensorStore, StoreError, StoredReading, UserRoleStore};
use plantwatch_core::types::DbId;
use plantwatch_core::{Parameter, Reading, Violation};
use plantwatch_events::{DispatchReport, DispatchSkip, NotificationDispatcher};
use serde::Serialize;

use crate::bounded::bounded;
use crate::config::PipelineConfig;
use crate::error::IngestError;
use crate::evaluator::ViolationEvaluator;
use crate::resolver::RecipientResolver;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Per-violation summary returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationSummary {
    pub parameter: Parameter,
    pub value: f64,
    pub recipient_count: usize,
    pub recipients_unresolved: bool,
    pub delivered: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<DispatchSkip>,
}

impl ViolationSummary {
    fn new(violation: &Violation, report: DispatchReport) -> Self {
        Self {
            parameter: violation.parameter,
            value: violation.value,
            recipient_count: violation.recipients.len(),
            recipients_unresolved: violation.recipients_unresolved,
            delivered: report.delivered_count(),
            failed: report.failed_count(),
            skipped: report.skipped,
        }
    }
}

/// What happened to an ingested reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestOutcome {
    pub reading_id: DbId,
    pub violation_count: usize,
    pub notifications_sent: usize,
    pub notifications_failed: usize,
    pub violations: Vec<ViolationSummary>,
}

// ---------------------------------------------------------------------------
// IngestionPipeline
// ---------------------------------------------------------------------------

/// Entry point for incoming sensor readings.
pub struct IngestionPipeline {
    evaluator: ViolationEvaluator,
    dispatcher: Arc<NotificationDispatcher>,
    sensor_store: Arc<dyn SensorStore>,
    config: PipelineConfig,
}

impl IngestionPipeline {
    pub fn new(
        user_store: Arc<dyn UserRoleStore>,
        sensor_store: Arc<dyn SensorStore>,
        dispatcher: Arc<NotificationDispatcher>,
        config: PipelineConfig,
    ) -> Self {
        let resolver = RecipientResolver::new(user_store, config.store_query_timeout);
        Self {
            evaluator: ViolationEvaluator::new(resolver),
            dispatcher,
            sensor_store,
            config,
        }
    }

    /// Evaluate, notify, and persist one reading.
    ///
    /// Delivery failures and recipient lookup failures are folded into the
    /// returned [`IngestOutcome`]. The reading is stored even when every
    /// notification fails.
    pub async fn ingest(&self, reading: Reading) -> Result<IngestOutcome, IngestError> {
        let persist = bounded(
            self.config.storage_write_timeout,
            self.sensor_store.append(&reading),
        );
        let notify = async {
            let violations = self.evaluator.evaluate(&reading).await;
            let reports = join_all(violations.iter().map(|v| self.dispatcher.dispatch(v))).await;
            (violations, reports)
        };
        // The write never waits on recipient lookups or delivery.
        let (stored, (violations, reports)) = tokio::join!(persist, notify);

        let reading_id = stored.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist sensor reading");
            IngestError::Storage(e)
        })?;

        let summaries: Vec<ViolationSummary> = violations
            .iter()
            .zip(reports)
            .map(|(violation, report)| ViolationSummary::new(violation, report))
            .collect();
        let notifications_sent = summaries.iter().map(|s| s.delivered).sum();
        let notifications_failed = summaries.iter().map(|s| s.failed).sum();

        tracing::info!(
            reading_id,
            violations = summaries.len(),
            notifications_sent,
            notifications_failed,
            "Sensor reading ingested"
        );

        Ok(IngestOutcome {
            reading_id,
            violation_count: summaries.len(),
            notifications_sent,
            notifications_failed,
            violations: summaries,
        })
    }

    /// Every stored reading, oldest first.
    pub async fn readings(&self) -> Result<Vec<StoredReading>, StoreError> {
        bounded(self.config.storage_write_timeout, self.sensor_store.list_all()).await
    }
}
