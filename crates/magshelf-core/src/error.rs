//! Error types for Magshelf core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed input document (bad JSON, wrong backup shape)
    #[error("Format error: {0}")]
    Format(String),

    /// No record with the given id
    #[error("Record not found: {0}")]
    NotFound(i64),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for CatalogError {
    fn from(err: rusqlite::Error) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Format(err.to_string())
    }
}
