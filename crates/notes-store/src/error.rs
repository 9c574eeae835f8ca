//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// True when the underlying database error is a foreign-key violation
    /// (Postgres error code 23503), e.g. inserting a note whose user does
    /// not exist.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            Self::Connection(sqlx::Error::Database(e)) => e.code().as_deref() == Some("23503"),
            _ => false,
        }
    }
}
