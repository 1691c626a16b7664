//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because the server
//! reports both with a JSON `{"error": ...}` body that callers show to users.
//! All other unexpected responses land in `HttpError` with the raw status
//! code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the requested todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server rejected the request payload (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A create was attempted with a blank task; no request was built.
    #[error("task must not be blank")]
    EmptyTask,

    /// The server returned a status other than the expected one, 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
