use body_mass_data::models::measurement::{MeasurementRecord, NewMeasurement};

use crate::date_format::{format_timestamp, DateFormatError};
use crate::entities::measurement::{Measurement, MeasurementHistoryEntry};

// Conversion functions between domain entities and data models
// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert a validated metric measurement and its BMI to a data model for insertion
pub fn convert_to_data_new_measurement(weight_kg: f64, height_cm: f64, bmi: f64) -> NewMeasurement {
    NewMeasurement {
        weight_kg,
        height_cm,
        bmi,
    }
}

/// Convert from data model to domain entity for a stored measurement
pub fn convert_to_domain_measurement(record: MeasurementRecord) -> Measurement {
    Measurement {
        id: record.id,
        weight_kg: record.weight_kg,
        height_cm: record.height_cm,
        bmi: record.bmi,
        created_at: record.created_at,
    }
}

/// Convert a stored measurement to a history entry, formatting its timestamp
pub fn convert_to_history_entry(measurement: Measurement) -> Result<MeasurementHistoryEntry, DateFormatError> {
    let created_at = format_timestamp(&measurement.created_at)?;

    Ok(MeasurementHistoryEntry {
        id: measurement.id,
        weight_kg: measurement.weight_kg,
        height_cm: measurement.height_cm,
        bmi: measurement.bmi,
        created_at,
    })
}
