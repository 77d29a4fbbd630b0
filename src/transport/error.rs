//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Only covers failures where no complete response was obtained.
/// A response with an unexpected status is not an `HttpError`; callers
/// inspect the status themselves.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and a response body that could not be read to the end.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
