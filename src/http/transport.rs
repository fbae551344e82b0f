//! Transport abstraction — "perform one HTTP exchange".
//!
//! The REST client depends only on this narrow capability, so tests can
//! substitute an in-memory double and the production adapter stays a thin
//! wrapper over reqwest.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::request::Method;

/// Connectivity-level failure: no route, refused connection, timeout.
/// HTTP error statuses are not transport errors — they arrive as a
/// [`RawResponse`] and are classified by the REST client.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Escape hatch for non-reqwest transports (test doubles included).
    #[error("{0}")]
    Other(String),
}

/// What came back from one wire exchange, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status. `None` models a transport that completed without
    /// producing response metadata — a malformed exchange the REST client
    /// reports as `DataCorrupted`.
    pub status: Option<u16>,
    /// Body bytes. May be empty.
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
        }
    }
}

/// One HTTP exchange per call. No retries, no shared mutable state.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, method: Method, url: Url) -> Result<RawResponse, TransportError>;
}

/// Production transport backed by reqwest.
///
/// Timeout policy is deliberately left at reqwest's defaults; callers that
/// need one can hand in their own configured client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a pre-configured reqwest client (custom timeouts, proxy, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn perform(&self, method: Method, url: Url) -> Result<RawResponse, TransportError> {
        let response = self.client.request(method.into(), url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse {
            status: Some(status),
            body,
        })
    }
}
