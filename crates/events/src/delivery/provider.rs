//! HTTP notification provider delivery.
//!
//! [`HttpProviderSink`] POSTs each [`Notification`] as JSON to the
//! provider's `/send` endpoint with a bearer token. One attempt per call;
//! a non-2xx status is a [`DeliveryError::HttpStatus`].

use std::time::Duration;

use async_trait::async_trait;

use super::{DeliveryError, NotificationSink};
use crate::notification::Notification;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default provider base URL when `NOTIFY_API_URL` is not set.
const DEFAULT_API_URL: &str = "https://api.courier.com";

// ---------------------------------------------------------------------------
// ProviderConfig
// ---------------------------------------------------------------------------

/// Credentials and endpoint of the notification provider.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Base URL; notifications go to `{api_url}/send`.
    pub api_url: String,
    /// Bearer token.
    pub auth_token: String,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_url", &self.api_url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

impl ProviderConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `NOTIFY_AUTH_TOKEN` is not set, signalling that the
    /// provider is not configured.
    ///
    /// | Variable            | Required | Default                   |
    /// |---------------------|----------|---------------------------|
    /// | `NOTIFY_AUTH_TOKEN` | yes      | —                         |
    /// | `NOTIFY_API_URL`    | no       | `https://api.courier.com` |
    pub fn from_env() -> Option<Self> {
        let auth_token = std::env::var("NOTIFY_AUTH_TOKEN").ok()?;
        Some(Self {
            api_url: std::env::var("NOTIFY_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            auth_token,
        })
    }

    fn send_url(&self) -> String {
        format!("{}/send", self.api_url.trim_end_matches('/'))
    }
}

// ---------------------------------------------------------------------------
// HttpProviderSink
// ---------------------------------------------------------------------------

/// Delivers notifications through the provider's REST API.
pub struct HttpProviderSink {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpProviderSink {
    /// Create a sink with a pre-configured HTTP client.
    pub fn new(config: ProviderConfig) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl NotificationSink for HttpProviderSink {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.config.send_url())
            .bearer_auth(&self.config.auth_token)
            .json(notification)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DeliveryError::HttpStatus(response.status().as_u16()));
        }

        tracing::debug!(
            recipient = %notification.recipient,
            kind = %notification.kind,
            "Provider accepted notification"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> ProviderConfig {
        ProviderConfig {
            api_url: url.to_string(),
            auth_token: "secret".to_string(),
        }
    }

    #[test]
    fn send_url_handles_trailing_slash() {
        assert_eq!(config("https://api.example.com/").send_url(), "https://api.example.com/send");
        assert_eq!(config("https://api.example.com").send_url(), "https://api.example.com/send");
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", config("https://api.example.com"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn new_does_not_panic() {
        let _sink = HttpProviderSink::new(config("https://api.example.com")).unwrap();
    }

    #[test]
    fn request_error_display() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = DeliveryError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }
}
