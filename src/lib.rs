//! # Marvel SDK
//!
//! A thin async Rust client for the Marvel Comics API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Config, request descriptors, wire types (no I/O)
//! 2. **Auth** — Per-request signing: `ts` + MD5 digest + `apikey`
//! 3. **Transport** — `Transport` trait with a reqwest production adapter
//! 4. **REST client** — `RestClient`: one exchange per call, status
//!    classification, JSON decoding
//! 5. **High-Level Client** — `MarvelClient` with sub-client accessors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marvel_sdk::prelude::*;
//!
//! let client = MarvelClient::builder()
//!     .keys("my-public-key", "my-private-key")
//!     .build()?;
//!
//! let page = client.characters().list(&GetCharacters {
//!     name_starts_with: Some("Spider".into()),
//!     ..Default::default()
//! }).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Per-client credentials and base endpoint.
pub mod config;

/// Request descriptors and endpoint construction.
pub mod request;

/// Domain modules (vertical slices): descriptors + wire types.
pub mod domain;

/// SDK error taxonomy.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Request signing: timestamp capture and MD5 digest.
pub mod auth;

// ── Layers 3–4: Transport + REST client ──────────────────────────────────────

/// HTTP layer: transport abstraction and the REST client.
pub mod http;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `MarvelClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Config + signing
    pub use crate::auth::{Clock, FixedClock, SystemClock};
    pub use crate::config::ApiConfig;

    // Request descriptors
    pub use crate::request::{ApiRequest, EndpointError, Method};

    // Domain types — character
    pub use crate::domain::character::{Character, GetCharacter, GetCharacters, Image};
    pub use crate::domain::{DataContainer, DataWrapper};

    // Errors
    pub use crate::error::ApiError;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Transport + REST client
    pub use crate::http::transport::{RawResponse, ReqwestTransport, Transport, TransportError};
    pub use crate::http::RestClient;

    // High-level client
    pub use crate::client::{CharactersClient, MarvelClient, MarvelClientBuilder};
}
