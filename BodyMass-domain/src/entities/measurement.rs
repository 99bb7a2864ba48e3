use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::units::{HeightUnit, WeightUnit};

/// A measurement submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSubmission {
    /// Weight expressed in `weight_unit`
    pub weight: f64,

    /// Unit of `weight`
    #[serde(default)]
    pub weight_unit: WeightUnit,

    /// Height expressed in `height_unit`
    pub height: f64,

    /// Unit of `height`
    #[serde(default)]
    pub height_unit: HeightUnit,

    /// Client-side creation time. Accepted but never stored: records are
    /// always stamped with the server's clock.
    #[serde(default)]
    pub client_created_at: Option<NaiveDateTime>,
}

impl MeasurementSubmission {
    /// Submission already expressed in kilograms and centimeters
    pub fn metric(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight: weight_kg,
            weight_unit: WeightUnit::Kilograms,
            height: height_cm,
            height_unit: HeightUnit::Centimeters,
            client_created_at: None,
        }
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_unit.to_kg(self.weight)
    }

    /// Height in centimeters
    pub fn height_cm(&self) -> f64 {
        self.height_unit.to_cm(self.height)
    }
}

/// A stored measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Storage-assigned identifier
    pub id: i64,

    /// Weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,

    /// BMI computed when the measurement was stored
    pub bmi: f64,

    /// Raw stored creation time
    pub created_at: String,
}

/// One row of the measurement history, with a display-formatted timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementHistoryEntry {
    /// Storage-assigned identifier
    pub id: i64,

    /// Weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,

    /// Stored BMI
    pub bmi: f64,

    /// Creation time as `DD/MM/YYYY - HH:MM`
    pub created_at: String,
}

impl MeasurementHistoryEntry {
    /// Positional form used on the wire: `(id, kg, height, bmi, created_at)`
    pub fn into_tuple(self) -> (i64, f64, f64, f64, String) {
        (self.id, self.weight_kg, self.height_cm, self.bmi, self.created_at)
    }
}
