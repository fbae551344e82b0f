//! SDK error taxonomy.
//!
//! Every failure a `send` can produce is one of these kinds; nothing is
//! retried or swallowed below this layer. The status-range mapping mirrors
//! the gateway's own classification and is a wire-compatibility contract;
//! the ranges live in `http::client`.

use thiserror::Error;

use crate::http::transport::TransportError;
use crate::request::EndpointError;

/// The failure side of one API call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 401–500. The gateway folds all client errors (404 included) into
    /// its authentication bucket; reproduced as-is for compatibility.
    #[error("you need to be authenticated first (status {status})")]
    Authentication { status: u16 },

    /// Malformed request construction, or HTTP 501–599.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// HTTP 600 — the gateway's sentinel for a deprecated endpoint.
    #[error("the url you requested is outdated")]
    Outdated,

    /// Any status outside the handled ranges (e.g. unhandled 3xx).
    #[error("network request failed (status {status})")]
    Failed { status: u16 },

    /// Success status but an empty body where content was expected.
    #[error("response returned with no data to decode")]
    NoData,

    /// Body present but it does not parse into the expected schema.
    #[error("could not decode the response: {0}")]
    UnableToDecode(#[from] serde_json::Error),

    /// The transport completed without an error yet produced no HTTP
    /// response metadata.
    #[error("transport returned neither a response nor an error")]
    DataCorrupted,

    /// Connectivity-level failure, cause passed through from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<EndpointError> for ApiError {
    fn from(err: EndpointError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
