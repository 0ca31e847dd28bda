//! Row models for the plantwatch tables.

pub mod sensor_reading;
pub mod user_role;
