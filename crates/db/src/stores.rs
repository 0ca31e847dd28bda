//! Postgres-backed implementations of the core store traits.

use async_trait::async_trait;
use plantwatch_core::store::{SensorStore, StoreError, StoredReading, UserRole, UserRoleStore};
use plantwatch_core::types::DbId;
use plantwatch_core::Reading;

use crate::repositories::{SensorReadingRepo, UserRoleRepo};
use crate::DbPool;

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Classify a sqlx error for callers of the store traits.
///
/// Unique violations become [`StoreError::Conflict`]; everything else means
/// the store could not serve the request.
pub fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return StoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
    }
    StoreError::Unavailable(err.to_string())
}

// ---------------------------------------------------------------------------
// User-role store
// ---------------------------------------------------------------------------

/// [`UserRoleStore`] over the `user_roles` table.
#[derive(Clone)]
pub struct PgUserRoleStore {
    pool: DbPool,
}

impl PgUserRoleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRoleStore for PgUserRoleStore {
    async fn list_emails_with_role_in(&self, roles: &[&str]) -> Result<Vec<String>, StoreError> {
        let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
        UserRoleRepo::list_emails_with_role_in(&self.pool, &roles)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn create_user(&self, email: &str, role: &str) -> Result<UserRole, StoreError> {
        let row = UserRoleRepo::create(&self.pool, email, role)
            .await
            .map_err(classify_sqlx_error)?;
        tracing::debug!(id = row.id, email = %row.email, role = %row.role, "User role created");
        Ok(row.into())
    }

    async fn list_users(&self) -> Result<Vec<UserRole>, StoreError> {
        let rows = UserRoleRepo::list(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(UserRole::from).collect())
    }
}

// ---------------------------------------------------------------------------
// Sensor store
// ---------------------------------------------------------------------------

/// [`SensorStore`] over the `sensor_readings` table.
#[derive(Clone)]
pub struct PgSensorStore {
    pool: DbPool,
}

impl PgSensorStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SensorStore for PgSensorStore {
    async fn append(&self, reading: &Reading) -> Result<DbId, StoreError> {
        SensorReadingRepo::insert(&self.pool, reading)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn list_all(&self) -> Result<Vec<StoredReading>, StoreError> {
        let rows = SensorReadingRepo::list_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        rows.into_iter()
            .map(|row| {
                let id = row.id;
                row.into_stored().map_err(|e| {
                    tracing::error!(id, error = %e, "Corrupt sensor reading row");
                    StoreError::Unavailable(format!("sensor reading {id} is corrupt: {e}"))
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
