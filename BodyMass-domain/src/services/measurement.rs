use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, info};

use body_mass_data::database::StorageConfig;
use body_mass_data::repository::{MeasurementRepositoryTrait, RepositoryError, SqliteMeasurementRepository};

use crate::calculator::calculate_bmi;
use crate::date_format::DateFormatError;
use crate::entities::conversions;
use crate::entities::measurement::{MeasurementHistoryEntry, MeasurementSubmission};

/// Message returned to clients that submit a zero height
pub const ZERO_HEIGHT_MESSAGE: &str = "Height cannot be zero";

/// Message returned when weight and height do not yield a representable BMI
pub const NON_FINITE_BMI_MESSAGE: &str = "Weight and height do not produce a finite BMI";

/// Measurement service errors
#[derive(Debug, Error, PartialEq)]
pub enum MeasurementServiceError {
    /// The submission cannot be processed
    #[error("{0}")]
    InvalidInput(String),

    /// The backing store failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored timestamp could not be parsed
    #[error("Date parsing error: {0}")]
    Parse(String),
}

impl From<RepositoryError> for MeasurementServiceError {
    fn from(err: RepositoryError) -> Self {
        MeasurementServiceError::Storage(err.to_string())
    }
}

impl From<DateFormatError> for MeasurementServiceError {
    fn from(err: DateFormatError) -> Self {
        MeasurementServiceError::Parse(err.to_string())
    }
}

/// Trait for measurement service operations
#[async_trait]
pub trait MeasurementServiceTrait {
    /// Validate a submission after unit conversion
    fn validate_submission(&self, submission: &MeasurementSubmission) -> Result<(), MeasurementServiceError>;

    /// Validate, compute and store a measurement, returning its BMI
    async fn submit_measurement(&self, submission: MeasurementSubmission) -> Result<f64, MeasurementServiceError>;

    /// Get the full measurement history in insertion order
    async fn list_measurements(&self) -> Result<Vec<MeasurementHistoryEntry>, MeasurementServiceError>;
}

/// Measurement service for domain logic
pub struct MeasurementService<R: MeasurementRepositoryTrait> {
    repository: R,
}

impl<R: MeasurementRepositoryTrait> MeasurementService<R> {
    /// Create a new measurement service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Repository backing this service
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: MeasurementRepositoryTrait> MeasurementServiceTrait for MeasurementService<R> {
    fn validate_submission(&self, submission: &MeasurementSubmission) -> Result<(), MeasurementServiceError> {
        validate_height(submission.height_cm())
    }

    async fn submit_measurement(&self, submission: MeasurementSubmission) -> Result<f64, MeasurementServiceError> {
        self.validate_submission(&submission)?;

        if let Some(client_created_at) = submission.client_created_at {
            debug!("Ignoring client-supplied created_at {}", client_created_at);
        }

        let weight_kg = submission.weight_kg();
        let height_cm = submission.height_cm();
        let bmi = calculate_bmi(weight_kg, height_cm);
        validate_bmi(bmi)?;

        let record = self
            .repository
            .insert(conversions::convert_to_data_new_measurement(weight_kg, height_cm, bmi))
            .await
            .map_err(|e| {
                error!("Failed to store measurement: {}", e);
                MeasurementServiceError::from(e)
            })?;

        info!("Stored measurement id={} bmi={}", record.id, bmi);
        Ok(bmi)
    }

    async fn list_measurements(&self) -> Result<Vec<MeasurementHistoryEntry>, MeasurementServiceError> {
        let records = self.repository.list_all().await.map_err(|e| {
            error!("Failed to load measurements: {}", e);
            MeasurementServiceError::from(e)
        })?;

        let history = records
            .into_iter()
            .map(conversions::convert_to_domain_measurement)
            .map(conversions::convert_to_history_entry)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Listing {} measurements", history.len());
        Ok(history)
    }
}

/// Reject zero heights before any computation
pub fn validate_height(height_cm: f64) -> Result<(), MeasurementServiceError> {
    if height_cm == 0.0 {
        return Err(MeasurementServiceError::InvalidInput(ZERO_HEIGHT_MESSAGE.to_string()));
    }
    Ok(())
}

/// Reject a BMI that cannot be stored or serialized as a number
pub fn validate_bmi(bmi: f64) -> Result<(), MeasurementServiceError> {
    if !bmi.is_finite() {
        return Err(MeasurementServiceError::InvalidInput(NON_FINITE_BMI_MESSAGE.to_string()));
    }
    Ok(())
}

/// Create the SQLite-backed measurement service
pub fn create_measurement_service(config: StorageConfig) -> MeasurementService<SqliteMeasurementRepository> {
    MeasurementService::new(SqliteMeasurementRepository::new(config))
}
