use std::sync::PoisonError;
use thiserror::Error;
use crate::database::DatabaseError;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The blocking storage task panicked or was cancelled
    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),

    /// Storage could not be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
