// BodyMass-api lib.rs
//
// This is the main library file for the BodyMass API.
// It exposes the router, configuration and public entities.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
