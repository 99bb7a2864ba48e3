// Testing utilities and mock implementations for the domain layer
// This module is only available in tests or when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use body_mass_data::repository::tests::MockMeasurementRepository;

use std::sync::RwLock;
use async_trait::async_trait;

use crate::calculator::calculate_bmi;
use crate::entities::measurement::{MeasurementHistoryEntry, MeasurementSubmission};
use crate::services::measurement::{validate_bmi, validate_height, MeasurementServiceError, MeasurementServiceTrait};

/// Mock implementation of the MeasurementServiceTrait for testing
pub struct MockMeasurementService {
    history: RwLock<Vec<MeasurementHistoryEntry>>,
    should_fail_storage: bool,
    should_fail_parse: bool,
}

impl Default for MockMeasurementService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMeasurementService {
    /// Create a new mock measurement service
    pub fn new() -> Self {
        Self {
            history: RwLock::new(Vec::new()),
            should_fail_storage: false,
            should_fail_parse: false,
        }
    }

    /// Configure the mock to fail every storage operation
    pub fn with_storage_failure(mut self) -> Self {
        self.should_fail_storage = true;
        self
    }

    /// Configure the mock to fail while formatting the history
    pub fn with_parse_failure(mut self) -> Self {
        self.should_fail_parse = true;
        self
    }

    /// Add pre-defined history entries to the mock
    pub fn with_entries(self, entries: Vec<MeasurementHistoryEntry>) -> Self {
        if let Ok(mut history) = self.history.write() {
            history.extend(entries);
        }
        self
    }

    /// Number of measurements stored so far
    pub fn len(&self) -> usize {
        self.history.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Whether nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MeasurementServiceTrait for MockMeasurementService {
    fn validate_submission(&self, submission: &MeasurementSubmission) -> Result<(), MeasurementServiceError> {
        validate_height(submission.height_cm())
    }

    async fn submit_measurement(&self, submission: MeasurementSubmission) -> Result<f64, MeasurementServiceError> {
        self.validate_submission(&submission)?;

        if self.should_fail_storage {
            return Err(MeasurementServiceError::Storage(
                "Storage failed - mock is configured to fail".to_string(),
            ));
        }

        let weight_kg = submission.weight_kg();
        let height_cm = submission.height_cm();
        let bmi = calculate_bmi(weight_kg, height_cm);
        validate_bmi(bmi)?;

        let mut history = self
            .history
            .write()
            .map_err(|e| MeasurementServiceError::Storage(e.to_string()))?;
        let id = history.last().map(|e| e.id + 1).unwrap_or(1);
        history.push(MeasurementHistoryEntry {
            id,
            weight_kg,
            height_cm,
            bmi,
            created_at: "05/01/2024 - 14:30".to_string(),
        });

        Ok(bmi)
    }

    async fn list_measurements(&self) -> Result<Vec<MeasurementHistoryEntry>, MeasurementServiceError> {
        if self.should_fail_storage {
            return Err(MeasurementServiceError::Storage(
                "Storage failed - mock is configured to fail".to_string(),
            ));
        }
        if self.should_fail_parse {
            return Err(MeasurementServiceError::Parse(
                "Unrecognized timestamp - mock is configured to fail".to_string(),
            ));
        }

        self.history
            .read()
            .map(|h| h.clone())
            .map_err(|e| MeasurementServiceError::Storage(e.to_string()))
    }
}
