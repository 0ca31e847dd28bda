//! HTTP push loop.
//!
//! POSTs a fresh random reading to the intake endpoint on a fixed
//! interval. A rejected or failed push is logged and the loop carries on.

use std::time::Duration;

use plantwatch_core::error::CoreError;
use plantwatch_core::Reading;

use crate::generator::random_reading;

/// HTTP request timeout for a single push.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from a single push.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server rejected reading with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error(transparent)]
    Reading(#[from] CoreError),
}

/// Posts readings to a plantwatch server.
pub struct ReadingSender {
    client: reqwest::Client,
    url: String,
}

impl ReadingSender {
    pub fn new(url: impl Into<String>) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Push one reading; returns the server's JSON response body.
    pub async fn send(&self, reading: &Reading) -> Result<serde_json::Value, SendError> {
        let response = self.client.post(&self.url).json(reading).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Generate and push a reading every `interval`.
///
/// Runs forever when `count` is `None`; otherwise stops after `count`
/// attempts. Returns the number of readings the server accepted.
pub async fn run(sender: &ReadingSender, interval: Duration, count: Option<u64>) -> u64 {
    let mut ticker = tokio::time::interval(interval);
    let mut attempts = 0u64;
    let mut accepted = 0u64;

    while count.is_none_or(|limit| attempts < limit) {
        ticker.tick().await;
        attempts += 1;

        match push_one(sender).await {
            Ok((reading, response)) => {
                accepted += 1;
                tracing::info!(
                    ?reading,
                    violations = %response["data"]["violation_count"],
                    "Data sent successfully"
                );
            }
            Err(e) => {
                tracing::error!(url = %sender.url(), error = %e, "Failed to send data");
            }
        }
    }

    accepted
}

async fn push_one(sender: &ReadingSender) -> Result<(Reading, serde_json::Value), SendError> {
    let reading = random_reading(&mut rand::rng())?;
    let response = sender.send(&reading).await?;
    Ok((reading, response))
}
