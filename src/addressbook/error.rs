//! Error types for address book retrieval.

use thiserror::Error;

use crate::contacts::ParseError;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A request header could not be built.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// Error type for fetching one address book.
///
/// Each variant only fails the affected book; the run continues
/// with the remaining books.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not produce a response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-success status.
    #[error("HTTP status {status}")]
    Status {
        /// The status code received
        status: http::StatusCode,
    },

    /// The export body is not valid UTF-8.
    #[error("Response body is not valid UTF-8")]
    Decode,

    /// The export body contains a malformed record.
    #[error("Malformed export: {0}")]
    Parse(#[from] ParseError),
}
