//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when calling the inventory service.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not connect to the service.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Deserialization(String),

    /// Any other transport failure.
    #[error("Request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Deserialization(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}
