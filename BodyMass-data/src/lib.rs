// BodyMass Data
// This crate handles storage of BMI measurements

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
