//! Outbound notification envelope.

use std::fmt;

use plantwatch_core::Parameter;
use serde::Serialize;

/// Why a notification is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A parameter left its safe range.
    Threshold(Parameter),
    /// A recipient was just registered.
    NewUser,
}

impl NotificationKind {
    /// Every kind, threshold kinds first in parameter order.
    pub fn all() -> impl Iterator<Item = NotificationKind> {
        Parameter::ALL
            .into_iter()
            .map(NotificationKind::Threshold)
            .chain(std::iter::once(NotificationKind::NewUser))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Threshold(p) => p.as_str(),
            NotificationKind::NewUser => "new_user",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recipient profile handed to the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub email: String,
}

/// Template data carried by a notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NotificationData {
    /// An out-of-range parameter and the offending value.
    Threshold { param: Parameter, value: f64 },
    /// A human-readable role-assignment message.
    Welcome { message: String },
}

/// A single notification addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    #[serde(skip)]
    pub kind: NotificationKind,
    /// Provider event identifier resolved from the [`EventCatalog`](crate::EventCatalog).
    pub event: String,
    pub recipient: String,
    pub profile: Profile,
    pub data: NotificationData,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        event: impl Into<String>,
        recipient: impl Into<String>,
        data: NotificationData,
    ) -> Self {
        let recipient = recipient.into();
        Self {
            kind,
            event: event.into(),
            profile: Profile {
                email: recipient.clone(),
            },
            recipient,
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
