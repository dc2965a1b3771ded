//! Error types for the comments gateway

use thiserror::Error;

/// Errors surfaced by the comments gateway
#[derive(Debug, Error)]
pub enum NetError {
    /// Transport or decoding failure from the HTTP client
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The configured endpoint is not a valid URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
