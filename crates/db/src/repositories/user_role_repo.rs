//! Repository for the `user_roles` table.

use sqlx::PgPool;

use crate::models::user_role::UserRoleRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, role, created_at";

/// Provides query operations for alert recipients.
pub struct UserRoleRepo;

impl UserRoleRepo {
    /// Insert a new recipient. Fails with a unique violation on
    /// `uq_user_roles_email` if the email is already registered.
    pub async fn create(pool: &PgPool, email: &str, role: &str) -> Result<UserRoleRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_roles (email, role) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRoleRow>(&query)
            .bind(email)
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// List all recipients ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_roles ORDER BY id ASC");
        sqlx::query_as::<_, UserRoleRow>(&query).fetch_all(pool).await
    }

    /// Distinct emails of every recipient holding one of `roles`.
    pub async fn list_emails_with_role_in(
        pool: &PgPool,
        roles: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT email FROM user_roles WHERE role = ANY($1) ORDER BY email",
        )
        .bind(roles)
        .fetch_all(pool)
        .await
    }
}
