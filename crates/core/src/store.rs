//! Trait seams for the two stores the engine talks to.
//!
//! The Postgres implementations live in `plantwatch-db`; in-memory ones in
//! `plantwatch-pipeline::memory`. Implementations provide their own
//! concurrency safety; callers never lock around them.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::reading::Reading;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type shared by every store implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be queried at all (connection, pool, I/O).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The call did not complete within its timeout budget.
    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),

    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A persisted reading as read back from the sensor store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredReading {
    pub id: DbId,
    #[serde(flatten)]
    pub reading: Reading,
    pub created_at: Timestamp,
}

/// A registered recipient and the single role they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Registry of recipients and their roles.
#[async_trait]
pub trait UserRoleStore: Send + Sync {
    /// Emails of every user whose role is one of `roles`.
    ///
    /// No match is an empty list, not an error.
    async fn list_emails_with_role_in(&self, roles: &[&str]) -> Result<Vec<String>, StoreError>;

    /// Register a new user with `role`. Duplicate emails yield
    /// [`StoreError::Conflict`].
    async fn create_user(&self, email: &str, role: &str) -> Result<UserRole, StoreError>;

    /// Every registered user, oldest first.
    async fn list_users(&self) -> Result<Vec<UserRole>, StoreError>;
}

/// Append-only store of sensor readings.
#[async_trait]
pub trait SensorStore: Send + Sync {
    /// Durably record `reading` and return its id.
    async fn append(&self, reading: &Reading) -> Result<DbId, StoreError>;

    /// Every stored reading in insertion order.
    async fn list_all(&self) -> Result<Vec<StoredReading>, StoreError>;
}
