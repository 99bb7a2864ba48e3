//! Body mass index arithmetic.

/// Number of decimal places kept in a stored BMI
pub const BMI_DECIMALS: i32 = 2;

/// Compute `weight_kg / height_m²` rounded to two decimals.
///
/// `height_cm` must be non-zero; the measurement service rejects zero heights
/// before this is reached. Rounding is half away from zero.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), BMI_DECIMALS)
}

/// Round `value` to `places` decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
