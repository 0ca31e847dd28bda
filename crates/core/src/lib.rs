//! Plantwatch domain core.
//!
//! Pure logic shared by every other crate in the workspace:
//!
//! - [`Parameter`]: the closed set of monitored sensor parameters.
//! - [`Reading`]: one validated snapshot of all five sensor values.
//! - [`ranges`] and [`roles`]: the static range and role tables.
//! - [`evaluation`]: out-of-range detection and the [`Violation`] type.
//! - [`store`]: the trait seams for the user-role and sensor stores.
//!
//! Nothing in this crate touches the network or a database.

pub mod error;
pub mod evaluation;
pub mod parameters;
pub mod ranges;
pub mod reading;
pub mod roles;
pub mod store;
pub mod types;

pub use evaluation::{OutOfRange, Violation};
pub use parameters::Parameter;
pub use reading::Reading;
