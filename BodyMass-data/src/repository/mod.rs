// Repository module structure
pub mod errors;
mod measurement;
#[cfg(any(test, feature = "mock"))]
mod in_memory;
mod storage;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use measurement::{MeasurementRepositoryTrait, SqliteMeasurementRepository};
pub use storage::TIMESTAMP_FORMAT;

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use measurement::tests;
