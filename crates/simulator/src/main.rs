//! `plantwatch-simulator` -- pushes random sensor readings to a server.
//!
//! # Environment variables
//!
//! | Variable                  | Default                                   |
//! |---------------------------|-------------------------------------------|
//! | `PLANTWATCH_URL`          | `http://127.0.0.1:8000/api/v1/readings`   |
//! | `SIMULATOR_INTERVAL_SECS` | `4`                                       |
//! | `SIMULATOR_COUNT`         | unset (run forever)                       |

use std::time::Duration;

use plantwatch_simulator::sender::{self, ReadingSender};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_URL: &str = "http://127.0.0.1:8000/api/v1/readings";

/// Default interval between pushes.
const DEFAULT_INTERVAL_SECS: u64 = 4;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plantwatch_simulator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let url = std::env::var("PLANTWATCH_URL").unwrap_or_else(|_| DEFAULT_URL.into());

    let interval_secs: u64 = std::env::var("SIMULATOR_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let count: Option<u64> = std::env::var("SIMULATOR_COUNT")
        .ok()
        .map(|v| {
            v.parse().unwrap_or_else(|_| {
                tracing::error!("SIMULATOR_COUNT must be a valid integer");
                std::process::exit(1);
            })
        });

    tracing::info!(url = %url, interval_secs, ?count, "Starting plantwatch-simulator");

    let sender = ReadingSender::new(url).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::process::exit(1);
    });

    let accepted = sender::run(&sender, Duration::from_secs(interval_secs), count).await;
    tracing::info!(accepted, "Simulator finished");
}
