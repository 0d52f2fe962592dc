//! Error types for backpract.

use std::io;
use thiserror::Error;

/// Result type alias for backpract operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in backpract operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No storage backend is available in this environment.
    #[error("Storage unavailable")]
    StorageUnavailable,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested language is not in the language table.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Execution service answered with a non-success status.
    #[error("Execution service error: {status} - {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Whatever body text could be read (possibly empty).
        body: String,
    },

    /// Network failure talking to the execution service.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Execution service answered 2xx with a body we could not use.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The command needs an active session.
    #[error("No active session")]
    NoActiveSession,

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
