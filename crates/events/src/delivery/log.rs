//! Tracing-only sink used when no provider is configured.

use async_trait::async_trait;

use super::{DeliveryError, NotificationSink};
use crate::notification::Notification;

/// Writes each notification to the log and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[async_trait]
impl NotificationSink for TracingSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        tracing::info!(
            kind = %notification.kind,
            event = %notification.event,
            recipient = %notification.recipient,
            data = ?notification.data,
            "Notification (log only)"
        );
        Ok(())
    }
}
