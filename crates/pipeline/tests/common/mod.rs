#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use plantwatch_core::store::{SensorStore, StoreError, StoredReading, UserRole, UserRoleStore};
use plantwatch_core::types::DbId;
use plantwatch_core::{Parameter, Reading};
use plantwatch_events::{
    DeliveryError, EventCatalog, Notification, NotificationDispatcher, NotificationKind,
    NotificationSink,
};
use plantwatch_pipeline::memory::{InMemorySensorStore, InMemoryUserRoleStore};
use plantwatch_pipeline::{IngestionPipeline, PipelineConfig};

/// Small budgets so timeout tests finish quickly.
pub fn test_config() -> PipelineConfig {
    PipelineConfig {
        store_query_timeout: Duration::from_millis(100),
        storage_write_timeout: Duration::from_millis(100),
    }
}

/// A catalog with an event id for every notification kind.
pub fn full_catalog() -> EventCatalog {
    NotificationKind::all().fold(EventCatalog::new(), |catalog, kind| {
        catalog.with_event(kind, format!("EVT-{}", kind.as_str().to_uppercase()))
    })
}

pub fn dispatcher(sink: Arc<RecordingSink>) -> Arc<NotificationDispatcher> {
    Arc::new(NotificationDispatcher::new(
        sink,
        full_catalog(),
        Duration::from_millis(200),
    ))
}

/// Users spread across every role.
pub fn plant_users() -> Arc<InMemoryUserRoleStore> {
    Arc::new(InMemoryUserRoleStore::with_users([
        ("tech1@plant.local", "technician"),
        ("tech2@plant.local", "technician"),
        ("boss@plant.local", "admin"),
        ("sparky@plant.local", "electrician"),
    ]))
}

pub fn build_pipeline(
    users: Arc<dyn UserRoleStore>,
    sensors: Arc<dyn SensorStore>,
    sink: Arc<RecordingSink>,
) -> IngestionPipeline {
    IngestionPipeline::new(users, sensors, dispatcher(sink), test_config())
}

/// Pipeline over plant users and a fresh in-memory sensor store.
pub fn default_pipeline() -> (IngestionPipeline, Arc<InMemorySensorStore>, Arc<RecordingSink>) {
    let sensors = Arc::new(InMemorySensorStore::new());
    let sink = Arc::new(RecordingSink::default());
    let pipeline = build_pipeline(plant_users(), sensors.clone(), sink.clone());
    (pipeline, sensors, sink)
}

pub fn reading(wl: f64, csl: f64, wt: f64, cst: f64, v: f64) -> Reading {
    Reading::new(wl, csl, wt, cst, v).unwrap()
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Records every notification; sends to `failing` recipients error out.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<Notification>>,
    failing: HashSet<String>,
}

impl RecordingSink {
    pub fn failing_for<'a>(recipients: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: recipients.into_iter().map(String::from).collect(),
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    /// Recipients of every attempted notification for `parameter`, sorted.
    pub fn recipients_for(&self, parameter: Parameter) -> Vec<String> {
        let mut recipients: Vec<String> = self
            .sent()
            .into_iter()
            .filter(|n| n.kind == NotificationKind::Threshold(parameter))
            .map(|n| n.recipient)
            .collect();
        recipients.sort();
        recipients
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
            return Err(DeliveryError::HttpStatus(502));
        }
        Ok(())
    }
}

/// A role store whose every query fails.
pub struct UnavailableRoleStore;

#[async_trait]
impl UserRoleStore for UnavailableRoleStore {
    async fn list_emails_with_role_in(&self, _roles: &[&str]) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn create_user(&self, _email: &str, _role: &str) -> Result<UserRole, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn list_users(&self) -> Result<Vec<UserRole>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

/// A role store that never answers within any reasonable budget.
pub struct StalledRoleStore;

#[async_trait]
impl UserRoleStore for StalledRoleStore {
    async fn list_emails_with_role_in(&self, _roles: &[&str]) -> Result<Vec<String>, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Vec::new())
    }

    async fn create_user(&self, email: &str, role: &str) -> Result<UserRole, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(UserRole {
            email: email.into(),
            role: role.into(),
        })
    }

    async fn list_users(&self) -> Result<Vec<UserRole>, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Vec::new())
    }
}

/// A sensor store that counts append attempts and rejects all of them.
#[derive(Default)]
pub struct FailingSensorStore {
    pub attempts: AtomicUsize,
}

impl FailingSensorStore {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SensorStore for FailingSensorStore {
    async fn append(&self, _reading: &Reading) -> Result<DbId, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("disk full".into()))
    }

    async fn list_all(&self) -> Result<Vec<StoredReading>, StoreError> {
        Err(StoreError::Unavailable("disk full".into()))
    }
}

/// A role store that answers only once `sensors` holds a reading, so a
/// lookup resolves only if the append was started before it.
pub struct WaitsForStoredReading {
    pub sensors: Arc<InMemorySensorStore>,
    pub users: Arc<InMemoryUserRoleStore>,
}

#[async_trait]
impl UserRoleStore for WaitsForStoredReading {
    async fn list_emails_with_role_in(&self, roles: &[&str]) -> Result<Vec<String>, StoreError> {
        while self.sensors.is_empty().await {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.users.list_emails_with_role_in(roles).await
    }

    async fn create_user(&self, email: &str, role: &str) -> Result<UserRole, StoreError> {
        self.users.create_user(email, role).await
    }

    async fn list_users(&self) -> Result<Vec<UserRole>, StoreError> {
        self.users.list_users().await
    }
}

/// Wraps an in-memory store and delays every call by `delay`.
pub struct Delayed<S> {
    pub inner: S,
    pub delay: Duration,
}

#[async_trait]
impl UserRoleStore for Delayed<InMemoryUserRoleStore> {
    async fn list_emails_with_role_in(&self, roles: &[&str]) -> Result<Vec<String>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_emails_with_role_in(roles).await
    }

    async fn create_user(&self, email: &str, role: &str) -> Result<UserRole, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.create_user(email, role).await
    }

    async fn list_users(&self) -> Result<Vec<UserRole>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_users().await
    }
}

#[async_trait]
impl SensorStore for Delayed<InMemorySensorStore> {
    async fn append(&self, reading: &Reading) -> Result<DbId, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.append(reading).await
    }

    async fn list_all(&self) -> Result<Vec<StoredReading>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_all().await
    }
}

/// Tight read budget next to a generous write budget.
pub fn split_budget_config() -> PipelineConfig {
    PipelineConfig {
        store_query_timeout: Duration::from_millis(50),
        storage_write_timeout: Duration::from_millis(500),
    }
}
