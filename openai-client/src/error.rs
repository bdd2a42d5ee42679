//! Error types for the chat completion client.

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by the chat completion client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, TLS, body read/decode)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The completion payload contained no choices
    #[error("empty completion: response contained no choices")]
    EmptyCompletion,
}
