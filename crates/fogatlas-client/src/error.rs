//! Error types for the FogAtlas client

use thiserror::Error;

/// Errors that can occur when using the FogAtlas client
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Endpoint cannot carry an API path
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// API returned an error status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
