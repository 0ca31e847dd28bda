//! Recipient registration.

use std::sync::Arc;

use plantwatch_core::store::{StoreError, UserRole, UserRoleStore};
use plantwatch_events::{DispatchReport, NotificationDispatcher};
use serde::Serialize;

use crate::bounded::bounded;
use crate::config::PipelineConfig;

/// A stored user and the outcome of their welcome notification.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub user: UserRole,
    pub welcome: DispatchReport,
}

/// Registers recipients and welcomes them.
pub struct UserRegistry {
    store: Arc<dyn UserRoleStore>,
    dispatcher: Arc<NotificationDispatcher>,
    config: PipelineConfig,
}

impl UserRegistry {
    pub fn new(
        store: Arc<dyn UserRoleStore>,
        dispatcher: Arc<NotificationDispatcher>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            dispatcher,
            config,
        }
    }

    /// Store `email` with `role`, then send a best-effort welcome.
    ///
    /// The welcome never fails registration; its outcome is reported
    /// alongside the stored user.
    pub async fn register(&self, email: &str, role: &str) -> Result<Registration, StoreError> {
        let user = bounded(
            self.config.storage_write_timeout,
            self.store.create_user(email, role),
        )
        .await?;
        tracing::info!(email = %user.email, role = %user.role, "Recipient registered");

        let welcome = self.dispatcher.welcome(&user.email, &user.role).await;
        Ok(Registration { user, welcome })
    }

    pub async fn list(&self) -> Result<Vec<UserRole>, StoreError> {
        bounded(self.config.store_query_timeout, self.store.list_users()).await
    }
}
