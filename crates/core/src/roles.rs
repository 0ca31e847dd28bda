//! Well-known role names and the static parameter-to-role table.
//!
//! Role names must match the values stored in `user_roles.role`.

use crate::parameters::Parameter;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_TECHNICIAN: &str = "technician";
pub const ROLE_ELECTRICIAN: &str = "electrician";

/// Roles responsible for the water and caustic-soda circuits.
const PROCESS_ROLES: &[&str] = &[ROLE_TECHNICIAN, ROLE_ADMIN];

/// Roles responsible for the electrical supply.
const ELECTRICAL_ROLES: &[&str] = &[ROLE_ELECTRICIAN, ROLE_ADMIN];

/// Roles whose holders are alerted when `parameter` leaves its range.
pub const fn roles_authorized_for(parameter: Parameter) -> &'static [&'static str] {
    match parameter {
        Parameter::WaterLevel
        | Parameter::CausticSodaLevel
        | Parameter::WaterTemperature
        | Parameter::CausticSodaTemperature => PROCESS_ROLES,
        Parameter::Voltage => ELECTRICAL_ROLES,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
