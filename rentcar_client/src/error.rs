//! Error types for catalog fetching

use std::fmt;

/// Errors that can occur while fetching the catalog from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// The backend answered with a non-success status. Retryable if the
    /// status is 429 or a server error.
    Api { status: u16, message: String },
    /// The response body was not the expected JSON. Not retryable.
    Decode(String),
}

impl FetchError {
    /// Whether a retry could plausibly succeed. Retry policy itself is the
    /// caller's business; the store only ever sees the final outcome.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Api { status, .. } => *status == 429 || *status >= 500,
            FetchError::Decode(_) => false,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
