//! Plantwatch notification infrastructure.
//!
//! This crate turns violations into outbound notifications:
//!
//! - [`Notification`] / [`NotificationKind`]: what is sent and why.
//! - [`EventCatalog`]: injected mapping from notification kind to the
//!   provider's event identifier.
//! - [`delivery`]: the [`NotificationSink`] seam and its implementations
//!   (HTTP provider, SMTP, tracing-only).
//! - [`NotificationDispatcher`]: isolated per-recipient fan-out with
//!   aggregated outcomes.

pub mod catalog;
pub mod config;
pub mod delivery;
pub mod dispatcher;
pub mod notification;

pub use catalog::EventCatalog;
pub use config::NotifierConfig;
pub use delivery::{DeliveryError, NotificationSink};
pub use dispatcher::{DeliveryOutcome, DispatchReport, DispatchSkip, NotificationDispatcher};
pub use notification::{Notification, NotificationData, NotificationKind, Profile};
