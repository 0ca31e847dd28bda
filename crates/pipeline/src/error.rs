use plantwatch_core::store::StoreError;

/// Hard failure of an ingestion call.
///
/// Only the sensor store write can fail an ingestion; recipient lookup and
/// delivery problems are reported in the outcome instead.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to persist reading: {0}")]
    Storage(#[from] StoreError),
}
