//! Static safe operating ranges, one closed interval per parameter.

use serde::Serialize;

use crate::parameters::Parameter;

/// A closed interval `[low, high]`. A value equal to either bound is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidRange {
    pub low: f64,
    pub high: f64,
}

impl ValidRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Safe operating range for `parameter`.
pub const fn range_of(parameter: Parameter) -> ValidRange {
    match parameter {
        Parameter::WaterLevel => ValidRange::new(75.0, 100.0),
        Parameter::CausticSodaLevel => ValidRange::new(1.0, 2.0),
        Parameter::WaterTemperature => ValidRange::new(40.0, 80.0),
        Parameter::CausticSodaTemperature => ValidRange::new(40.0, 80.0),
        Parameter::Voltage => ValidRange::new(10.0, 14.0),
    }
}

/// Whether `value` is compliant for `parameter`.
pub fn is_within_range(parameter: Parameter, value: f64) -> bool {
    range_of(parameter).contains(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
