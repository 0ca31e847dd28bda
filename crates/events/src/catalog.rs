//! Notification kind to provider event identifier mapping.

use std::collections::HashMap;

use crate::notification::NotificationKind;

/// Prefix of the environment variables holding event identifiers.
const ENV_PREFIX: &str = "NOTIFY_EVENT_";

/// Provider event identifiers, one per notification kind.
///
/// Resolved once at startup and injected into the dispatcher. A kind with
/// no entry is "unmapped": the dispatcher logs and skips it.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: HashMap<NotificationKind, String>,
}

impl EventCatalog {
    /// An empty catalog; every kind is unmapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_event(mut self, kind: NotificationKind, event_id: impl Into<String>) -> Self {
        self.events.insert(kind, event_id.into());
        self
    }

    /// Load identifiers from `NOTIFY_EVENT_<KIND>` environment variables.
    ///
    /// | Variable                            | Kind                       |
    /// |-------------------------------------|----------------------------|
    /// | `NOTIFY_EVENT_WATER_LEVEL`          | `water_level`              |
    /// | `NOTIFY_EVENT_CAUSTIC_SODA_LEVEL`   | `caustic_soda_level`       |
    /// | `NOTIFY_EVENT_WATER_TEMPERATURE`    | `water_temperature`        |
    /// | `NOTIFY_EVENT_CAUSTIC_SODA_TEMPERATURE` | `caustic_soda_temperature` |
    /// | `NOTIFY_EVENT_VOLTAGE`              | `voltage`                  |
    /// | `NOTIFY_EVENT_NEW_USER`             | `new_user`                 |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load identifiers through an arbitrary key lookup. Blank values are
    /// treated as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut catalog = Self::new();
        for kind in NotificationKind::all() {
            let key = env_key(kind);
            match lookup(&key).map(|v| v.trim().to_string()) {
                Some(id) if !id.is_empty() => {
                    catalog.events.insert(kind, id);
                }
                _ => tracing::warn!(kind = %kind, key, "No event identifier configured"),
            }
        }
        catalog
    }

    /// Event identifier for `kind`, if configured.
    pub fn event_for(&self, kind: NotificationKind) -> Option<&str> {
        self.events.get(&kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn env_key(kind: NotificationKind) -> String {
    format!("{ENV_PREFIX}{}", kind.as_str().to_uppercase())
}
