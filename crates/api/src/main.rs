use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use plantwatch_core::store::{SensorStore, UserRoleStore};
use plantwatch_events::delivery::sink_from_env;
use plantwatch_events::{NotificationDispatcher, NotifierConfig};
use plantwatch_pipeline::memory::{InMemorySensorStore, InMemoryUserRoleStore};
use plantwatch_pipeline::{IngestionPipeline, PipelineConfig, UserRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plantwatch_api::config::ServerConfig;
use plantwatch_api::router::build_app_router;
use plantwatch_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    let pipeline_config = PipelineConfig::from_env();
    let notifier_config = NotifierConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Stores ---
    let (pool, user_store, sensor_store): (_, Arc<dyn UserRoleStore>, Arc<dyn SensorStore>) =
        match &config.database_url {
            Some(url) => {
                let pool = plantwatch_db::create_pool(url, config.db_max_connections)
                    .await
                    .expect("Failed to connect to database");
                tracing::info!("Database connection pool created");

                plantwatch_db::health_check(&pool)
                    .await
                    .expect("Database health check failed");

                plantwatch_db::run_migrations(&pool)
                    .await
                    .expect("Failed to run database migrations");
                tracing::info!("Database migrations applied");

                (
                    Some(pool.clone()),
                    Arc::new(plantwatch_db::PgUserRoleStore::new(pool.clone())),
                    Arc::new(plantwatch_db::PgSensorStore::new(pool)),
                )
            }
            None => {
                tracing::warn!("DATABASE_URL not set, using in-memory stores");
                (
                    None,
                    Arc::new(InMemoryUserRoleStore::new()),
                    Arc::new(InMemorySensorStore::new()),
                )
            }
        };

    // --- Notifications ---
    if notifier_config.catalog.is_empty() {
        tracing::warn!("No NOTIFY_EVENT_* identifiers configured, notifications will be skipped");
    }
    let sink = sink_from_env().expect("Failed to build notification sink");
    tracing::info!(sink = sink.name(), events = notifier_config.catalog.len(), "Notification sink ready");
    let dispatcher = Arc::new(NotificationDispatcher::from_config(sink, notifier_config));

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        pipeline: Arc::new(IngestionPipeline::new(
            Arc::clone(&user_store),
            sensor_store,
            Arc::clone(&dispatcher),
            pipeline_config,
        )),
        registry: Arc::new(UserRegistry::new(
            user_store,
            dispatcher,
            pipeline_config,
        )),
        pool: pool.clone(),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    });

    // In-flight requests get `shutdown_timeout` to drain once a signal arrives.
    tokio::select! {
        joined = server => {
            joined.expect("Server task panicked").expect("Server error");
        }
        () = async {
            shutdown_signal().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            tracing::warn!(?shutdown_timeout, "Shutdown drain timed out, exiting");
        }
    }

    // --- Post-shutdown cleanup ---
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }
    tracing::info!("Graceful shutdown complete");
}

/// Initialise the global subscriber. `LOG_FORMAT=json` selects JSON output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "plantwatch_api=debug,plantwatch_pipeline=debug,plantwatch_events=debug,tower_http=debug"
            .into()
    });

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
