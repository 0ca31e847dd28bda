//! A single snapshot of all five sensor values.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::parameters::Parameter;

/// One reading submitted by the plant, with every field required.
///
/// Readings are immutable: fields are private and only exposed through
/// accessors. Construction goes through [`Reading::new`] (or serde, which
/// routes through the same checks), so a `Reading` always holds finite
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReadingFields")]
pub struct Reading {
    water_level: f64,
    caustic_soda_level: f64,
    water_temperature: f64,
    caustic_soda_temperature: f64,
    voltage: f64,
}

/// Raw deserialization target; validated into a [`Reading`].
#[derive(Deserialize)]
struct ReadingFields {
    water_level: f64,
    caustic_soda_level: f64,
    water_temperature: f64,
    caustic_soda_temperature: f64,
    voltage: f64,
}

impl TryFrom<ReadingFields> for Reading {
    type Error = CoreError;

    fn try_from(f: ReadingFields) -> Result<Self, Self::Error> {
        Reading::new(
            f.water_level,
            f.caustic_soda_level,
            f.water_temperature,
            f.caustic_soda_temperature,
            f.voltage,
        )
    }
}

impl Reading {
    /// Build a reading, rejecting NaN and infinite values.
    pub fn new(
        water_level: f64,
        caustic_soda_level: f64,
        water_temperature: f64,
        caustic_soda_temperature: f64,
        voltage: f64,
    ) -> Result<Self, CoreError> {
        let reading = Self {
            water_level,
            caustic_soda_level,
            water_temperature,
            caustic_soda_temperature,
            voltage,
        };
        for parameter in Parameter::ALL {
            ensure_finite(parameter, reading.value(parameter))?;
        }
        Ok(reading)
    }

    /// Return a copy of this reading with one parameter replaced.
    #[cfg(test)]
    pub(crate) fn with_value(self, parameter: Parameter, value: f64) -> Result<Self, CoreError> {
        ensure_finite(parameter, value)?;
        let mut next = self;
        match parameter {
            Parameter::WaterLevel => next.water_level = value,
            Parameter::CausticSodaLevel => next.caustic_soda_level = value,
            Parameter::WaterTemperature => next.water_temperature = value,
            Parameter::CausticSodaTemperature => next.caustic_soda_temperature = value,
            Parameter::Voltage => next.voltage = value,
        }
        Ok(next)
    }

    /// Value of the given parameter.
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::WaterLevel => self.water_level,
            Parameter::CausticSodaLevel => self.caustic_soda_level,
            Parameter::WaterTemperature => self.water_temperature,
            Parameter::CausticSodaTemperature => self.caustic_soda_temperature,
            Parameter::Voltage => self.voltage,
        }
    }

    pub fn water_level(&self) -> f64 {
        self.water_level
    }

    pub fn caustic_soda_level(&self) -> f64 {
        self.caustic_soda_level
    }

    pub fn water_temperature(&self) -> f64 {
        self.water_temperature
    }

    pub fn caustic_soda_temperature(&self) -> f64 {
        self.caustic_soda_temperature
    }

    pub fn voltage(&self) -> f64 {
        self.voltage
    }
}

fn ensure_finite(parameter: Parameter, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{parameter} must be a finite number"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
