//! Repository for the `sensor_readings` table (append-only).

use plantwatch_core::types::DbId;
use plantwatch_core::Reading;
use sqlx::PgPool;

use crate::models::sensor_reading::SensorReadingRow;

/// Column list for `sensor_readings` SELECT queries.
const COLUMNS: &str = "\
    id, water_level, caustic_soda_level, water_temperature, \
    caustic_soda_temperature, voltage, created_at";

/// Column list for INSERT statements (excludes generated `id` and `created_at`).
const INSERT_COLUMNS: &str = "\
    water_level, caustic_soda_level, water_temperature, \
    caustic_soda_temperature, voltage";

/// Provides query operations for sensor readings.
pub struct SensorReadingRepo;

impl SensorReadingRepo {
    /// Insert a reading and return the new row id.
    pub async fn insert(pool: &PgPool, reading: &Reading) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensor_readings ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id"
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(reading.water_level())
            .bind(reading.caustic_soda_level())
            .bind(reading.water_temperature())
            .bind(reading.caustic_soda_temperature())
            .bind(reading.voltage())
            .fetch_one(pool)
            .await
    }

    /// List every reading in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SensorReadingRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensor_readings ORDER BY id ASC");
        sqlx::query_as::<_, SensorReadingRow>(&query)
            .fetch_all(pool)
            .await
    }
}
