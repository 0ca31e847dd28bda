//! Sensor reading rows (append-only).

use plantwatch_core::error::CoreError;
use plantwatch_core::store::StoredReading;
use plantwatch_core::types::{DbId, Timestamp};
use plantwatch_core::Reading;
use serde::Serialize;
use sqlx::FromRow;

/// A single row of the `sensor_readings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SensorReadingRow {
    pub id: DbId,
    pub water_level: f64,
    pub caustic_soda_level: f64,
    pub water_temperature: f64,
    pub caustic_soda_temperature: f64,
    pub voltage: f64,
    pub created_at: Timestamp,
}

impl SensorReadingRow {
    /// Rebuild the validated domain reading from the stored columns.
    ///
    /// Fails only if the row holds a non-finite value, which the intake
    /// path never writes.
    pub fn into_stored(self) -> Result<StoredReading, CoreError> {
        let reading = Reading::new(
            self.water_level,
            self.caustic_soda_level,
            self.water_temperature,
            self.caustic_soda_temperature,
            self.voltage,
        )?;
        Ok(StoredReading {
            id: self.id,
            reading,
            created_at: self.created_at,
        })
    }
}
