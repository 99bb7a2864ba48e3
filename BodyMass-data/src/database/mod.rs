use thiserror::Error;

// Database modules
pub mod connection;
pub mod migrations;

// Re-export database connection functions
pub use connection::*;

/// Database error enum
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite error
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// Connection error
    #[error("Failed to connect to database: {0}")]
    ConnectionError(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Migration error
    #[error("Database migration error: {0}")]
    MigrationError(String),
}
