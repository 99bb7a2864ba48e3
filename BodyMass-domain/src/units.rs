//! Weight and height units accepted on submission.
//!
//! Everything is converted to kilograms and centimeters before validation,
//! calculation and storage.

use serde::{Deserialize, Serialize};

/// Kilograms in one avoirdupois pound
pub const KG_PER_POUND: f64 = 0.453592;

/// Centimeters in one foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Unit of a submitted weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    /// Pounds
    #[serde(rename = "lbs")]
    Pounds,
}

impl WeightUnit {
    /// Convert a weight in this unit to kilograms
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => value,
            WeightUnit::Pounds => value * KG_PER_POUND,
        }
    }
}

/// Unit of a submitted height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeightUnit {
    /// Centimeters
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    /// Meters
    #[serde(rename = "m")]
    Meters,
    /// Feet
    #[serde(rename = "ft")]
    Feet,
}

impl HeightUnit {
    /// Convert a height in this unit to centimeters
    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            HeightUnit::Centimeters => value,
            HeightUnit::Meters => value * 100.0,
            HeightUnit::Feet => value * CM_PER_FOOT,
        }
    }
}
