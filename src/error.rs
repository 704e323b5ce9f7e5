//! Error types for the RAGFlow client

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    /// Server answered with a non-success status. Carries the status code
    /// and the raw response body, untouched.
    #[error("API request failed ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File read/write error during upload or download
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Base URL or path could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Create a new API error from a status code and raw body text
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Error::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a new config error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// The HTTP status code, if the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server rejected the request (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if (400..500).contains(status))
    }

    /// Check if the server itself failed (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}
