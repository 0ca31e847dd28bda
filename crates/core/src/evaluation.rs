//! Out-of-range detection for sensor readings.
//!
//! Pure logic with no store access. [`out_of_range`] finds the offending
//! parameters; the pipeline crate attaches recipients to turn each one into
//! a [`Violation`].

use std::collections::BTreeSet;

use serde::Serialize;

use crate::parameters::Parameter;
use crate::ranges::{range_of, ValidRange};
use crate::reading::Reading;

/// A parameter whose value fell outside its safe range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutOfRange {
    pub parameter: Parameter,
    pub value: f64,
    pub range: ValidRange,
}

/// An out-of-range parameter together with the users to alert.
///
/// Created fresh for each evaluation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub parameter: Parameter,
    pub value: f64,
    /// Recipient emails, deduplicated and sorted.
    pub recipients: BTreeSet<String>,
    /// `true` when the user-role store could not be queried, in which case
    /// `recipients` is empty because nobody could be resolved rather than
    /// because nobody holds a matching role.
    pub recipients_unresolved: bool,
}

impl Violation {
    pub fn new(parameter: Parameter, value: f64, recipients: BTreeSet<String>) -> Self {
        Self {
            parameter,
            value,
            recipients,
            recipients_unresolved: false,
        }
    }

    /// A violation whose recipients could not be looked up.
    pub fn unresolved(parameter: Parameter, value: f64) -> Self {
        Self {
            parameter,
            value,
            recipients: BTreeSet::new(),
            recipients_unresolved: true,
        }
    }
}

/// Check every parameter of `reading` in declaration order and return the
/// ones outside their range. An empty result means the reading is compliant.
pub fn out_of_range(reading: &Reading) -> Vec<OutOfRange> {
    let mut found = Vec::new();
    for parameter in Parameter::ALL {
        check_parameter(parameter, reading.value(parameter), &mut found);
    }
    found
}

/// Compare a single value against its range and record it if it is outside.
fn check_parameter(parameter: Parameter, value: f64, found: &mut Vec<OutOfRange>) {
    let range = range_of(parameter);
    if range.contains(value) {
        return;
    }
    found.push(OutOfRange {
        parameter,
        value,
        range,
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
