use chrono::Utc;
use chrono_tz::Tz;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::models::measurement::{MeasurementRecord, NewMeasurement};
use super::errors::RepositoryError;

/// Text layout of a stored `created_at`, e.g. `2024-01-05 14:30:00.123456-05:00`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

/// Current instant rendered in the given civil timezone
pub fn current_timestamp(timezone: &Tz) -> String {
    Utc::now()
        .with_timezone(timezone)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// SQL operations for measurement rows on an open connection
pub struct DatabaseStorage;

impl DatabaseStorage {
    /// Insert a measurement and return the stored row
    pub fn insert(
        conn: &Connection,
        measurement: &NewMeasurement,
        created_at: &str,
    ) -> Result<MeasurementRecord, RepositoryError> {
        conn.execute(
            "INSERT INTO bmi_measurements (weight_kg, height_cm, bmi, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                measurement.weight_kg,
                measurement.height_cm,
                measurement.bmi,
                created_at,
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!("Stored measurement in database: id={}", id);

        Ok(MeasurementRecord {
            id,
            weight_kg: measurement.weight_kg,
            height_cm: measurement.height_cm,
            bmi: measurement.bmi,
            created_at: created_at.to_string(),
        })
    }

    /// Get all measurements in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<MeasurementRecord>, RepositoryError> {
        let mut stmt = conn.prepare(
            "SELECT id, weight_kg, height_cm, bmi, created_at
             FROM bmi_measurements ORDER BY id ASC",
        )?;

        let records = stmt.query_map([], |row| {
            Ok(MeasurementRecord {
                id: row.get(0)?,
                weight_kg: row.get(1)?,
                height_cm: row.get(2)?,
                bmi: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut result = Vec::new();
        for record in records {
            result.push(record?);
        }

        debug!("Loaded {} measurements from database", result.len());
        Ok(result)
    }
}
