//! Custom error types for authentication

use thiserror::Error;

/// Custom error type for authentication operations
///
/// Both user-facing variants are recoverable; the UI shows the display
/// string and lets the user retry or switch between login and register.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Register with an email that already has an account
    #[error("User with this email already exists")]
    DuplicateUser,

    /// Login with no matching email and password pair
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Underlying storage failed
    #[error("Authentication storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<common::StorageError> for AuthError {
    fn from(e: common::StorageError) -> Self {
        AuthError::Storage(e.into())
    }
}
