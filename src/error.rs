//! Telegraph error types

use thiserror::Error;

/// Telegraph client errors
#[derive(Error, Debug)]
pub enum TelegraphError {
    /// Node sequence could not be serialized
    #[error("Encode error: {0}")]
    Encode(String),

    /// Malformed node or payload in a decoded response
    #[error("Decode error: {0}")]
    Decode(String),

    /// Response bytes are not a valid envelope
    #[error("Invalid response envelope: {0}")]
    EnvelopeParse(String),

    /// The service answered with `ok: false`
    #[error("Telegraph error: {message}")]
    Service {
        /// Error message from the server, unchanged
        message: String,
    },

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error while reading files to upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The call needs an access token and none is set
    #[error("Access token required")]
    MissingAccessToken,

    /// Request arguments rejected before sending
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TelegraphError {
    /// Check if the error was reported by the service itself
    pub fn is_service(&self) -> bool {
        matches!(self, TelegraphError::Service { .. })
    }

    /// Server-supplied message, if this is a service error
    pub fn service_message(&self) -> Option<&str> {
        match self {
            TelegraphError::Service { message } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias using TelegraphError
pub type Result<T> = std::result::Result<T, TelegraphError>;
