//! External delivery channels for plantwatch notifications.
//!
//! [`NotificationSink`] is the seam the dispatcher sends through. This
//! module provides the HTTP notification provider, SMTP email, and a
//! tracing-only fallback, and picks one from the environment with
//! [`sink_from_env`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::notification::Notification;

pub mod email;
pub mod log;
pub mod provider;

pub use email::{EmailConfig, EmailSink};
pub use log::TracingSink;
pub use provider::{HttpProviderSink, ProviderConfig};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Why a single notification could not be delivered.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The underlying HTTP request failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider returned HTTP {0}")]
    HttpStatus(u16),

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Message build error: {0}")]
    Build(String),

    /// The send did not complete within its timeout budget.
    #[error("Send timed out after {0:?}")]
    Timeout(Duration),
}

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

/// Opaque delivery provider.
///
/// Implementations send exactly one notification per call and report
/// failure through [`DeliveryError`]; they never retry.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

/// Choose a sink from the environment.
///
/// The HTTP provider wins when `NOTIFY_AUTH_TOKEN` is set, then SMTP when
/// `SMTP_HOST` is set; otherwise notifications are only logged.
pub fn sink_from_env() -> Result<Arc<dyn NotificationSink>, DeliveryError> {
    if let Some(config) = ProviderConfig::from_env() {
        tracing::info!(api_url = %config.api_url, "Using HTTP notification provider");
        return Ok(Arc::new(HttpProviderSink::new(config)?));
    }
    if let Some(config) = EmailConfig::from_env() {
        tracing::info!(smtp_host = %config.smtp_host, "Using SMTP notification delivery");
        return Ok(Arc::new(EmailSink::new(config)?));
    }
    tracing::warn!("No notification provider configured, notifications will only be logged");
    Ok(Arc::new(TracingSink))
}
