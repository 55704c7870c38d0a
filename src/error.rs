//! Error types for the Gumroad client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Nothing in the crate recovers from an error; they all bubble up to the caller.

use thiserror::Error;

/// The main error type for the Gumroad client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Construction Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Error constructing request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Error requesting: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Request cancelled")]
    Cancelled,

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Error decoding response body: {0}")]
    Decode(#[source] serde_json::Error),

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("name must be one of [{}], got '{name}'", .valid.join(" "))]
    InvalidResourceSubscription { name: String, valid: Vec<String> },

    // ============================================================================
    // CLI Errors
    // ============================================================================
    #[error("{0}")]
    Usage(String),

    #[error("Error encoding output: {0}")]
    Output(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Status code of a non-2xx response, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) | Error::RequestBuild(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was raised locally without touching the network
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidResourceSubscription { .. })
    }
}

/// Result type alias for the Gumroad client
pub type Result<T> = std::result::Result<T, Error>;
