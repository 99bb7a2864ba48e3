// Domain entities and value objects
pub mod measurement;
pub mod conversions;

// Re-export common types for easier imports
pub use measurement::{Measurement, MeasurementHistoryEntry, MeasurementSubmission};
