//! HTTP layer — transport abstraction and the `RestClient`.

pub mod client;
pub mod transport;

pub use client::RestClient;
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError};
