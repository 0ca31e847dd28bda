//! Plantwatch ingestion pipeline.
//!
//! Wires the pure core to its collaborators:
//!
//! - [`RecipientResolver`]: roles to recipient emails via the user-role store.
//! - [`ViolationEvaluator`]: reading to ordered, recipient-resolved violations.
//! - [`IngestionPipeline`]: the per-reading entry point: evaluate, dispatch,
//!   persist.
//! - [`UserRegistry`]: recipient registration with a welcome notification.
//! - [`memory`]: in-memory store implementations.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod memory;
pub mod orchestrator;
pub mod registration;
pub mod resolver;

mod bounded;

pub use config::PipelineConfig;
pub use error::IngestError;
pub use evaluator::ViolationEvaluator;
pub use orchestrator::{IngestOutcome, IngestionPipeline, ViolationSummary};
pub use registration::{Registration, UserRegistry};
pub use resolver::RecipientResolver;
