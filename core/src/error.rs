//! Error types for the products API client.
//!
//! # Design
//! Each variant corresponds to one class of outcome the UI reports
//! differently: a local validation failure, a structured rejection from the
//! API, a missing product, a transport failure, or any other status code.

use thiserror::Error;

/// Errors returned by `ProductClient` parse methods and `ProductApi` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed the local checks; no request was sent. The reason is for
    /// logs only and is never shown to the user.
    #[error("invalid input: {0}")]
    Validation(&'static str),

    /// The server returned 400 with a `detail` message.
    #[error("rejected by the API: {detail}")]
    Rejected { detail: String },

    /// The server returned 404 for the targeted product.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status that has no dedicated meaning.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
