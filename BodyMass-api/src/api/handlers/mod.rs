pub mod root;
pub mod imc;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use imc::{create_service, list_measurements, submit_measurement, MeasurementService};
pub use root::root;
