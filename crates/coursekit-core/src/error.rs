//! Error types for coursekit-core

use thiserror::Error;

/// Result type alias using coursekit-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in coursekit-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The upload collaborator rejected or failed the transfer
    #[error("Upload error: {0}")]
    Upload(String),
}
