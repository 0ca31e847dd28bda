//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod sensor_reading_repo;
pub mod user_role_repo;

pub use sensor_reading_repo::SensorReadingRepo;
pub use user_role_repo::UserRoleRepo;
