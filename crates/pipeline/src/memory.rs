//! In-memory store implementations.
//!
//! Used when no database is configured, and by tests.

use async_trait::async_trait;
use chrono::Utc;
use plantwatch_core::store::{SensorStore, StoreError, StoredReading, UserRole, UserRoleStore};
use plantwatch_core::types::DbId;
use plantwatch_core::Reading;
use tokio::sync::RwLock;

// ---------------------------------------------------------------------------
// User roles
// ---------------------------------------------------------------------------

/// Insertion-ordered user list; emails are unique.
#[derive(Default)]
pub struct InMemoryUserRoleStore {
    users: RwLock<Vec<UserRole>>,
}

impl InMemoryUserRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with `(email, role)` pairs.
    pub fn with_users<'a>(users: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let users = users
            .into_iter()
            .map(|(email, role)| UserRole {
                email: email.to_string(),
                role: role.to_string(),
            })
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRoleStore for InMemoryUserRoleStore {
    async fn list_emails_with_role_in(&self, roles: &[&str]) -> Result<Vec<String>, StoreError> {
        let users = self.users.read().await;
        let mut emails: Vec<String> = users
            .iter()
            .filter(|u| roles.contains(&u.role.as_str()))
            .map(|u| u.email.clone())
            .collect();
        emails.sort();
        emails.dedup();
        Ok(emails)
    }

    async fn create_user(&self, email: &str, role: &str) -> Result<UserRole, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::Conflict(format!(
                "User with email {email} already exists"
            )));
        }
        let user = UserRole {
            email: email.to_string(),
            role: role.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserRole>, StoreError> {
        Ok(self.users.read().await.clone())
    }
}

// ---------------------------------------------------------------------------
// Sensor readings
// ---------------------------------------------------------------------------

/// Append-only reading log with ids starting at 1.
#[derive(Default)]
pub struct InMemorySensorStore {
    readings: RwLock<Vec<StoredReading>>,
}

impl InMemorySensorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.readings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SensorStore for InMemorySensorStore {
    async fn append(&self, reading: &Reading) -> Result<DbId, StoreError> {
        let mut readings = self.readings.write().await;
        let id = readings.len() as DbId + 1;
        readings.push(StoredReading {
            id,
            reading: *reading,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<StoredReading>, StoreError> {
        Ok(self.readings.read().await.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
