//! Recipient rows.

use plantwatch_core::store::UserRole;
use plantwatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single row of the `user_roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRoleRow {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
}

impl From<UserRoleRow> for UserRole {
    fn from(row: UserRoleRow) -> Self {
        UserRole {
            email: row.email,
            role: row.role,
        }
    }
}
