// BodyMass Domain
// This crate contains the business logic for the BodyMass application

// BMI arithmetic
pub mod calculator;

// Weight and height unit conversions
pub mod units;

// Display formatting of stored timestamps
pub mod date_format;

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Re-export the database module from the data crate for convenience
pub use body_mass_data::database;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
