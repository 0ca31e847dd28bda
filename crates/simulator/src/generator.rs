//! Random sensor readings.
//!
//! The simulated bands straddle the safe ranges on purpose so that a
//! running simulator regularly produces violations.

use plantwatch_core::error::CoreError;
use plantwatch_core::ranges::ValidRange;
use plantwatch_core::{Parameter, Reading};
use rand::Rng;

/// Band each parameter is drawn from.
pub const fn simulated_band(parameter: Parameter) -> ValidRange {
    match parameter {
        Parameter::WaterLevel => ValidRange::new(71.0, 100.0),
        Parameter::CausticSodaLevel => ValidRange::new(0.6, 2.0),
        Parameter::WaterTemperature => ValidRange::new(31.0, 88.0),
        Parameter::CausticSodaTemperature => ValidRange::new(32.0, 88.0),
        Parameter::Voltage => ValidRange::new(6.0, 12.0),
    }
}

/// Draw one reading with every value uniform in its [`simulated_band`].
pub fn random_reading<R: Rng + ?Sized>(rng: &mut R) -> Result<Reading, CoreError> {
    let [wl, csl, wt, cst, v] = Parameter::ALL.map(|p| {
        let band = simulated_band(p);
        rng.random_range(band.low..=band.high)
    });
    Reading::new(wl, csl, wt, cst, v)
}
