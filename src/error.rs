//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Tag identifying which class of directory failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field was empty, or an unsupported sort criterion was given
    Validation,

    /// A contact with the same email already exists
    Duplicate,

    /// No contact matches the lookup email
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::NotFound => write!(f, "not_found"),
        }
    }
}

/// Errors that can occur when operating on a contact directory.
///
/// A failed operation never leaves the directory partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Contact is missing a required field, or the sort criterion is unknown
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Contact email already present in the directory
    #[error("Duplicate contact: {0}")]
    Duplicate(String),

    /// No contact with the given email
    #[error("Contact not found: {0}")]
    NotFound(String),
}

impl DirectoryError {
    /// The kind tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Duplicate(_) => ErrorKind::Duplicate,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// The human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Duplicate(msg) | Self::NotFound(msg) => msg,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
