//! REST client — one signed exchange per call, classified into a typed result.
//!
//! Per call the flow is linear: descriptor → signed URL → one transport
//! exchange → status classification → decode. Terminal outcomes are final;
//! there are no retries and no intermediate state survives a call.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::{Clock, SystemClock};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::transport::{ReqwestTransport, Transport};
use crate::request::ApiRequest;

/// Executes signed requests against the gateway.
///
/// Holds only immutable config behind `Arc`s, so clones are cheap and
/// concurrent calls need no locking.
#[derive(Clone)]
pub struct RestClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
}

impl RestClient {
    /// Production client: reqwest transport, system clock.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()), Arc::new(SystemClock))
    }

    /// Client with substituted collaborators (test doubles, custom reqwest
    /// configuration, pinned clocks).
    pub fn with_transport(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            transport,
            clock,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send one request and decode the body into the descriptor's schema.
    ///
    /// An empty body on a success status is `NoData`; a body that does not
    /// parse is `UnableToDecode`.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let body = self.send_raw(request).await?;
        if body.is_empty() {
            return Err(ApiError::NoData);
        }
        decode(&body)
    }

    /// Send one request and return the raw body bytes of a success response.
    ///
    /// Construction failures surface as `BadRequest` without touching the
    /// network. The future resolves exactly once with the final outcome.
    pub async fn send_raw<R: ApiRequest>(&self, request: &R) -> Result<Vec<u8>, ApiError> {
        let url = crate::request::endpoint(request, &self.config, self.clock.as_ref())?;
        let method = request.method();
        tracing::debug!(%method, %url, "sending request");

        let response = self.transport.perform(method, url).await?;
        let Some(status) = response.status else {
            return Err(ApiError::DataCorrupted);
        };
        tracing::debug!(status, bytes = response.body.len(), "response received");

        classify(status)?;
        Ok(response.body)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::UnableToDecode)
}

/// Map an HTTP status onto the gateway's outcome classification.
///
/// The 401–500 bucket and the non-standard 600 sentinel reproduce the
/// gateway's contract verbatim.
fn classify(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401..=500 => Err(ApiError::Authentication { status }),
        501..=599 => Err(ApiError::BadRequest(format!("status {status}"))),
        600 => Err(ApiError::Outdated),
        _ => Err(ApiError::Failed { status }),
    }
}
