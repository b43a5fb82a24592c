//! Error types for cnc-core

use std::path::PathBuf;

/// Result type for cnc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cnc-core operations
///
/// Every variant is recoverable: a failed store operation leaves the
/// in-memory collection exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was empty or a field value was not acceptable
    #[error("Invalid {field}: {reason}")]
    ValidationFailed { field: String, reason: String },

    /// No record with the given id exists
    #[error("Tool not found: {id}")]
    NotFound { id: String },

    /// A payload did not decode to an array of tool records
    #[error("Malformed tool data: {message}")]
    MalformedData { message: String },

    /// The persistence adapter could not write the payload
    #[error("Failed to save tool data: {message}")]
    WriteFailed { message: String },

    /// Configuration file could not be parsed or holds invalid values
    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from cnc-fs
    #[error(transparent)]
    Fs(#[from] cnc_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn required(field: &str) -> Self {
        Self::ValidationFailed {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedData {
            message: message.into(),
        }
    }
}
