// Public entities for the BodyMass API
// This module contains data structures that cross the HTTP boundary

// Measurement submission and history rows
pub mod measurement;

// Common entities for errors and greetings
pub mod common;
