//! Notifier configuration loaded once at startup.

use std::time::Duration;

use crate::catalog::EventCatalog;

/// Default per-send timeout budget in milliseconds.
const DEFAULT_SEND_TIMEOUT_MS: u64 = 10_000;

/// Settings for the [`NotificationDispatcher`](crate::NotificationDispatcher).
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Upper bound on a single sink send; exceeding it is a delivery failure.
    pub send_timeout: Duration,
    /// Event identifier per notification kind.
    pub catalog: EventCatalog,
}

impl NotifierConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable               | Default |
    /// |------------------------|---------|
    /// | `SINK_SEND_TIMEOUT_MS` | `10000` |
    /// | `NOTIFY_EVENT_<KIND>`  | —       |
    pub fn from_env() -> Self {
        let send_timeout_ms = std::env::var("SINK_SEND_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SEND_TIMEOUT_MS);
        Self {
            send_timeout: Duration::from_millis(send_timeout_ms),
            catalog: EventCatalog::from_env(),
        }
    }
}
