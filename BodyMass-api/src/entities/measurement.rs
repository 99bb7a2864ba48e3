use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use body_mass_domain::units::{HeightUnit, WeightUnit};

/// Request payload for submitting a measurement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitMeasurementRequest {
    /// Weight, in kilograms unless `weight_unit` says otherwise
    #[schema(example = 70.0)]
    pub kg: f64,

    /// Height, in centimeters unless `height_unit` says otherwise. Must not be zero.
    #[schema(example = 175.0)]
    pub height: f64,

    /// Client-side creation time (ISO 8601). Must be a date-time, but its
    /// value is ignored: the server always stamps records with its own clock.
    #[schema(example = "2024-01-05T14:30:00Z")]
    pub created_at: String,

    /// Unit of `kg`: `kg` (default) or `lbs`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "kg")]
    pub weight_unit: Option<WeightUnit>,

    /// Unit of `height`: `cm` (default), `m` or `ft`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "cm")]
    pub height_unit: Option<HeightUnit>,
}

/// One history row on the wire: `[id, kg, height, bmi, "DD/MM/YYYY - HH:MM"]`
pub type MeasurementRow = (i64, f64, f64, f64, String);
