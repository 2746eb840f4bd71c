//! Store error types
//!
//! A missing row on a single-row lookup is the only condition the store
//! distinguishes; every other driver failure is carried through as-is.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Product store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the requested id
    #[error("Product not found")]
    NotFound,

    /// Underlying database failure
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Failure inside a non-database store (in-memory)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// Build from a driver error, folding "no rows" into `NotFound`
    pub fn from_fetch(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }

    /// Returns true if this is the distinguished not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
