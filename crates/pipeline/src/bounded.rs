use std::future::Future;
use std::time::Duration;

use plantwatch_core::store::StoreError;

/// Run a store call under a timeout budget; elapsing is a [`StoreError::Timeout`].
pub(crate) async fn bounded<T>(
    budget: Duration,
    call: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, StoreError> {
    tokio::time::timeout(budget, call)
        .await
        .unwrap_or(Err(StoreError::Timeout(budget)))
}
