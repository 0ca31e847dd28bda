//! Role-to-recipient resolution.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use plantwatch_core::store::{StoreError, UserRoleStore};

use crate::bounded::bounded;

/// Looks up the recipients holding any of a set of roles.
#[derive(Clone)]
pub struct RecipientResolver {
    store: Arc<dyn UserRoleStore>,
    query_timeout: Duration,
}

impl RecipientResolver {
    pub fn new(store: Arc<dyn UserRoleStore>, query_timeout: Duration) -> Self {
        Self {
            store,
            query_timeout,
        }
    }

    /// Union of the recipients holding any role in `roles`, deduplicated.
    ///
    /// No matching recipient is an empty set. A store that cannot be
    /// queried, or does not answer within the timeout budget, is an error
    /// the caller should treat as a soft failure.
    pub async fn resolve(&self, roles: &[&str]) -> Result<BTreeSet<String>, StoreError> {
        if roles.is_empty() {
            return Ok(BTreeSet::new());
        }
        let emails = bounded(
            self.query_timeout,
            self.store.list_emails_with_role_in(roles),
        )
        .await?;
        Ok(emails.into_iter().collect())
    }
}
