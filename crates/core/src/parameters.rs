//! The closed set of monitored sensor parameters.
//!
//! Every table in the system (ranges, roles, notification events) is keyed
//! by [`Parameter`]. Lookups are exhaustive `match`es, so adding a variant
//! without a range and a role entry does not compile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A monitored sensor parameter.
///
/// Variants are declared in evaluation order; [`Parameter::ALL`] preserves
/// that order and is what the evaluator iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    WaterLevel,
    CausticSodaLevel,
    WaterTemperature,
    CausticSodaTemperature,
    Voltage,
}

impl Parameter {
    /// All parameters in declaration (evaluation) order.
    pub const ALL: [Parameter; 5] = [
        Parameter::WaterLevel,
        Parameter::CausticSodaLevel,
        Parameter::WaterTemperature,
        Parameter::CausticSodaTemperature,
        Parameter::Voltage,
    ];

    /// Wire name of the parameter, matching the reading's JSON field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Parameter::WaterLevel => "water_level",
            Parameter::CausticSodaLevel => "caustic_soda_level",
            Parameter::WaterTemperature => "water_temperature",
            Parameter::CausticSodaTemperature => "caustic_soda_temperature",
            Parameter::Voltage => "voltage",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
