//! Custom error types for the common library
//!
//! This module defines the storage error type shared by every backend and by
//! the crates persisting through one.

use thiserror::Error;

/// Custom error type for storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error occurred while reading or writing the backing file
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred while encoding or decoding stored values
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Storage configuration error: {0}")]
    Configuration(String),
}

impl StorageError {
    /// Error for a store whose interior lock was poisoned by a panic
    pub(crate) fn poisoned() -> Self {
        StorageError::Configuration("storage lock poisoned".to_string())
    }
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
