//! Violation-to-recipient notification fan-out.
//!
//! [`NotificationDispatcher`] sends one notification per recipient through
//! the configured [`NotificationSink`]. Sends run concurrently and are
//! isolated from one another: a failed or slow send only affects its own
//! [`RecipientOutcome`]. The dispatcher never returns an error; callers get
//! a [`DispatchReport`] to log or aggregate.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use plantwatch_core::Violation;
use serde::Serialize;

use crate::catalog::EventCatalog;
use crate::config::NotifierConfig;
use crate::delivery::{DeliveryError, NotificationSink};
use crate::notification::{Notification, NotificationData, NotificationKind};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of one send attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Delivered,
    Failed { cause: String },
}

/// Outcome of the attempt for a single recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipientOutcome {
    pub recipient: String,
    #[serde(flatten)]
    pub outcome: DeliveryOutcome,
}

/// Why a whole dispatch was skipped without sending anything.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum DispatchSkip {
    #[error("No event identifier configured for notification kind {0}")]
    UnmappedEventKind(String),
}

/// Aggregate outcome of dispatching one notification kind to its recipients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchReport {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<DispatchSkip>,
    pub outcomes: Vec<RecipientOutcome>,
}

impl DispatchReport {
    fn skipped(kind: NotificationKind, reason: DispatchSkip) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            skipped: Some(reason),
            outcomes: Vec::new(),
        }
    }

    pub fn delivered_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == DeliveryOutcome::Delivered)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.delivered_count()
    }
}

// ---------------------------------------------------------------------------
// NotificationDispatcher
// ---------------------------------------------------------------------------

/// Sends notifications for violations and new-user welcomes.
pub struct NotificationDispatcher {
    sink: Arc<dyn NotificationSink>,
    catalog: EventCatalog,
    send_timeout: Duration,
}

impl NotificationDispatcher {
    pub fn new(sink: Arc<dyn NotificationSink>, catalog: EventCatalog, send_timeout: Duration) -> Self {
        Self {
            sink,
            catalog,
            send_timeout,
        }
    }

    pub fn from_config(sink: Arc<dyn NotificationSink>, config: NotifierConfig) -> Self {
        Self::new(sink, config.catalog, config.send_timeout)
    }

    /// Notify every recipient of `violation`.
    pub async fn dispatch(&self, violation: &Violation) -> DispatchReport {
        let kind = NotificationKind::Threshold(violation.parameter);
        let data = NotificationData::Threshold {
            param: violation.parameter,
            value: violation.value,
        };
        self.deliver_all(kind, violation.recipients.iter().map(String::as_str), data)
            .await
    }

    /// Welcome a newly registered recipient. Targets only `email`; no role
    /// resolution takes place.
    pub async fn welcome(&self, email: &str, role: &str) -> DispatchReport {
        let data = NotificationData::Welcome {
            message: format!("You have been added as {role}"),
        };
        self.deliver_all(NotificationKind::NewUser, std::iter::once(email), data)
            .await
    }

    /// Resolve the event identifier and send to each recipient concurrently.
    async fn deliver_all<'a>(
        &self,
        kind: NotificationKind,
        recipients: impl Iterator<Item = &'a str>,
        data: NotificationData,
    ) -> DispatchReport {
        let Some(event) = self.catalog.event_for(kind) else {
            let reason = DispatchSkip::UnmappedEventKind(kind.as_str().to_string());
            tracing::warn!(kind = %kind, "{reason}, skipping notification");
            return DispatchReport::skipped(kind, reason);
        };

        let sends = recipients.map(|recipient| {
            let notification = Notification::new(kind, event, recipient, data.clone());
            async move { self.send_one(notification).await }
        });
        let outcomes = join_all(sends).await;

        DispatchReport {
            kind: kind.as_str().to_string(),
            skipped: None,
            outcomes,
        }
    }

    /// One bounded, isolated send attempt.
    async fn send_one(&self, notification: Notification) -> RecipientOutcome {
        let result = match tokio::time::timeout(self.send_timeout, self.sink.send(&notification)).await
        {
            Ok(result) => result,
            Err(_) => Err(DeliveryError::Timeout(self.send_timeout)),
        };

        let outcome = match result {
            Ok(()) => {
                tracing::info!(
                    sink = self.sink.name(),
                    kind = %notification.kind,
                    recipient = %notification.recipient,
                    "Notification sent"
                );
                DeliveryOutcome::Delivered
            }
            Err(e) => {
                tracing::error!(
                    sink = self.sink.name(),
                    kind = %notification.kind,
                    recipient = %notification.recipient,
                    error = %e,
                    "Notification delivery failed"
                );
                DeliveryOutcome::Failed {
                    cause: e.to_string(),
                }
            }
        };

        RecipientOutcome {
            recipient: notification.recipient,
            outcome,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
