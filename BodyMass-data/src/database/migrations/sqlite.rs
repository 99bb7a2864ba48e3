use rusqlite::Connection;
use tracing::debug;

use crate::database::DatabaseError;

/// Name of the single table holding BMI measurements
pub const MEASUREMENTS_TABLE: &str = "bmi_measurements";

/// Run SQLite migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Running SQLite migrations");

    create_measurements_table(conn)?;

    Ok(())
}

/// Create the measurements table
fn create_measurements_table(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Creating {} table if not exists", MEASUREMENTS_TABLE);

    conn.execute(
        "CREATE TABLE IF NOT EXISTS bmi_measurements (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            weight_kg REAL NOT NULL,
            height_cm REAL NOT NULL,
            bmi REAL NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .map_err(|e| DatabaseError::MigrationError(format!("Failed to create {}: {}", MEASUREMENTS_TABLE, e)))?;

    Ok(())
}
