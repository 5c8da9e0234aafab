//! Error types for the Contact App.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors raised by a contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The database is unreachable or a read/write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A lookup that the caller required to succeed found nothing
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The write would give two contacts the same name
    #[error("Name already in use: {0}")]
    DuplicateName(String),
}

/// Errors returned by the contact service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The submission failed one or more field checks
    #[error("Invalid submission: {0}")]
    Invalid(ValidationErrors),

    /// The store failed or refused the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::Storage(format!("Task join error: {}", err))
    }
}
