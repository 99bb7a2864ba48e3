pub mod measurement;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use measurement::{
    create_measurement_service, MeasurementService, MeasurementServiceError, MeasurementServiceTrait,
    NON_FINITE_BMI_MESSAGE, ZERO_HEIGHT_MESSAGE,
};
