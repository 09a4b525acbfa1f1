//! Error types for the todo API client.
//!
//! # Design
//! A 400 from the listing endpoint always means a rejected query parameter,
//! so it gets its own variant carrying the server's message. Every other
//! unexpected status lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected a query parameter (HTTP 400).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The server returned a non-2xx status other than 400.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}
