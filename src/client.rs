//! High-level client — `MarvelClient` with sub-client accessors.
//!
//! Thin convenience layer over [`RestClient`]: the builder assembles config
//! and collaborators, sub-clients group the per-resource calls.

use std::sync::Arc;

use crate::auth::{Clock, SystemClock};
use crate::config::ApiConfig;
use crate::domain::character::{Character, CharacterDataWrapper, GetCharacter, GetCharacters};
use crate::error::ApiError;
use crate::http::transport::{ReqwestTransport, Transport};
use crate::http::RestClient;
use crate::request::ApiRequest;

// Re-export sub-client types for convenience.
pub use self::Characters as CharactersClient;

/// The primary entry point for the Marvel SDK.
#[derive(Clone)]
pub struct MarvelClient {
    pub(crate) rest: RestClient,
}

impl std::fmt::Debug for MarvelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarvelClient").finish_non_exhaustive()
    }
}

impl MarvelClient {
    pub fn builder() -> MarvelClientBuilder {
        MarvelClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn characters(&self) -> Characters<'_> {
        Characters { client: self }
    }

    /// Send an arbitrary descriptor. Escape hatch for resources without a
    /// dedicated sub-client.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        self.rest.send(request).await
    }

    pub fn config(&self) -> &ApiConfig {
        self.rest.config()
    }
}

/// Sub-client for character operations.
pub struct Characters<'a> {
    pub(crate) client: &'a MarvelClient,
}

impl<'a> Characters<'a> {
    /// List characters matching the descriptor's filters.
    pub async fn list(
        &self,
        request: &GetCharacters,
    ) -> Result<CharacterDataWrapper, ApiError> {
        self.client.rest.send(request).await
    }

    /// Fetch a single character by id.
    ///
    /// The gateway wraps even single-entity lookups in the list envelope; an
    /// envelope with no results is reported as `NoData`.
    pub async fn get(&self, id: u64) -> Result<Character, ApiError> {
        let wrapper = self.client.rest.send(&GetCharacter { id }).await?;
        wrapper
            .data
            .results
            .into_iter()
            .next()
            .ok_or(ApiError::NoData)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MarvelClientBuilder {
    base_endpoint: String,
    public_key: Option<String>,
    private_key: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for MarvelClientBuilder {
    fn default() -> Self {
        Self {
            base_endpoint: crate::network::DEFAULT_API_URL.to_string(),
            public_key: None,
            private_key: None,
            transport: None,
            clock: None,
        }
    }
}

impl MarvelClientBuilder {
    pub fn base_endpoint(mut self, url: &str) -> Self {
        self.base_endpoint = url.to_string();
        self
    }

    /// API key pair. Required.
    pub fn keys(mut self, public_key: &str, private_key: &str) -> Self {
        self.public_key = Some(public_key.to_string());
        self.private_key = Some(private_key.to_string());
        self
    }

    /// Substitute the transport (test double, custom reqwest client).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Substitute the signing clock. Tests pin this to get reproducible
    /// `ts`/`hash` query parameters.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<MarvelClient, ApiError> {
        let (Some(public_key), Some(private_key)) = (self.public_key, self.private_key) else {
            return Err(ApiError::BadRequest(
                "an API key pair is required; call `keys(public, private)`".to_string(),
            ));
        };

        let config = ApiConfig::new(self.base_endpoint, public_key, private_key);
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        Ok(MarvelClient {
            rest: RestClient::with_transport(config, transport, clock),
        })
    }
}
