use std::sync::{Arc, Mutex};

use crate::models::measurement::{MeasurementRecord, NewMeasurement};
use super::errors::RepositoryError;

/// In-memory storage for measurements, used by the mock repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    /// Stored rows in insertion order
    records: Arc<Mutex<Vec<MeasurementRecord>>>,
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a measurement, assigning the next id
    pub fn store(&self, measurement: &NewMeasurement, created_at: String) -> Result<MeasurementRecord, RepositoryError> {
        let mut store = self.records.lock()?;
        let id = store.last().map(|r| r.id + 1).unwrap_or(1);

        let record = MeasurementRecord {
            id,
            weight_kg: measurement.weight_kg,
            height_cm: measurement.height_cm,
            bmi: measurement.bmi,
            created_at,
        };
        store.push(record.clone());
        Ok(record)
    }

    /// Preload an already stored row
    pub fn push(&self, record: MeasurementRecord) -> Result<(), RepositoryError> {
        self.records.lock()?.push(record);
        Ok(())
    }

    /// Get all rows in insertion order
    pub fn get_all(&self) -> Result<Vec<MeasurementRecord>, RepositoryError> {
        Ok(self.records.lock()?.clone())
    }
}
