use serde::{Deserialize, Serialize};

/// Storage model for a BMI measurement row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Row identifier assigned by SQLite, strictly increasing
    pub id: i64,

    /// Weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,

    /// BMI computed at insert time
    pub bmi: f64,

    /// Server-assigned creation time, stored as text
    pub created_at: String,
}

/// Input data for inserting a new measurement.
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeasurement {
    /// Weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,

    /// Precomputed BMI
    pub bmi: f64,
}
