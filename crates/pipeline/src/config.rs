//! Store-call timeout budgets.

use std::time::Duration;

/// Default budget for user-role store reads.
const DEFAULT_STORE_QUERY_TIMEOUT_MS: u64 = 2_000;

/// Default budget for every store write and for sensor store reads.
const DEFAULT_STORAGE_WRITE_TIMEOUT_MS: u64 = 5_000;

/// Per-call timeouts applied by the pipeline to every store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Recipient lookups and user listing.
    pub store_query_timeout: Duration,
    /// Reading appends, user registration and reading listing.
    pub storage_write_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            store_query_timeout: Duration::from_millis(DEFAULT_STORE_QUERY_TIMEOUT_MS),
            storage_write_timeout: Duration::from_millis(DEFAULT_STORAGE_WRITE_TIMEOUT_MS),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default |
    /// |----------------------------|---------|
    /// | `STORE_QUERY_TIMEOUT_MS`   | `2000`  |
    /// | `STORAGE_WRITE_TIMEOUT_MS` | `5000`  |
    pub fn from_env() -> Self {
        Self {
            store_query_timeout: env_millis(
                "STORE_QUERY_TIMEOUT_MS",
                DEFAULT_STORE_QUERY_TIMEOUT_MS,
            ),
            storage_write_timeout: env_millis(
                "STORAGE_WRITE_TIMEOUT_MS",
                DEFAULT_STORAGE_WRITE_TIMEOUT_MS,
            ),
        }
    }
}

fn env_millis(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}
