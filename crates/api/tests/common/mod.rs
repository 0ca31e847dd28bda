#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use plantwatch_core::store::{SensorStore, UserRoleStore};
use plantwatch_events::{
    DeliveryError, EventCatalog, Notification, NotificationDispatcher, NotificationKind,
    NotificationSink,
};
use plantwatch_pipeline::memory::{InMemorySensorStore, InMemoryUserRoleStore};
use plantwatch_pipeline::{IngestionPipeline, PipelineConfig, UserRegistry};
use tower::ServiceExt;

use plantwatch_api::config::ServerConfig;
use plantwatch_api::router::build_app_router;
use plantwatch_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Records every notification; sends to `failing` recipients error out.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<Notification>>,
    pub failing: HashSet<String>,
}

impl RecordingSink {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.failing.contains(&notification.recipient) {
            return Err(DeliveryError::HttpStatus(500));
        }
        Ok(())
    }
}

/// Handles to the collaborators behind a test app.
pub struct TestApp {
    pub router: Router,
    pub sink: Arc<RecordingSink>,
    pub sensors: Arc<InMemorySensorStore>,
}

/// Build the full application router over the given stores.
pub fn build_app_with(
    users: Arc<dyn UserRoleStore>,
    sensors: Arc<InMemorySensorStore>,
    sink: Arc<RecordingSink>,
) -> TestApp {
    let config = test_config();
    let catalog = NotificationKind::all().fold(EventCatalog::new(), |c, kind| {
        c.with_event(kind, format!("EVT-{kind}"))
    });
    let dispatcher = Arc::new(NotificationDispatcher::new(
        sink.clone(),
        catalog,
        Duration::from_millis(500),
    ));
    let pipeline_config = PipelineConfig::default();
    let sensor_store: Arc<dyn SensorStore> = sensors.clone();

    let state = AppState {
        config: Arc::new(config.clone()),
        pipeline: Arc::new(IngestionPipeline::new(
            Arc::clone(&users),
            sensor_store,
            Arc::clone(&dispatcher),
            pipeline_config,
        )),
        registry: Arc::new(UserRegistry::new(
            users,
            dispatcher,
            pipeline_config,
        )),
        pool: None,
    };

    TestApp {
        router: build_app_router(state, &config),
        sink,
        sensors,
    }
}

/// App with one technician, one admin and one electrician registered.
pub fn build_test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRoleStore::with_users([
        ("tech@plant.local", "technician"),
        ("boss@plant.local", "admin"),
        ("sparky@plant.local", "electrician"),
    ]));
    build_app_with(
        users,
        Arc::new(InMemorySensorStore::new()),
        Arc::new(RecordingSink::default()),
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
