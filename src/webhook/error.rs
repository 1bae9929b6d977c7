//! Error types for webhook delivery.

use thiserror::Error;

use crate::message::ValidationError;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the network level. Nothing is retried.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, TLS errors, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for sending a message.
///
/// Validation failures are reported before anything is transmitted.
#[derive(Debug, Error)]
pub enum SendError {
    /// The message failed validation; nothing was sent.
    #[error("Invalid message: {0}")]
    Validation(#[from] ValidationError),

    /// The request could not be delivered.
    #[error(transparent)]
    Http(#[from] HttpError),
}
