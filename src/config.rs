//! Per-client configuration: base endpoint + API key pair.

use std::fmt;

/// Credentials and endpoint for one API client.
///
/// Immutable once constructed. How the keys are loaded (file, environment,
/// hardcoded) is up to the caller.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base endpoint resource names resolve against. Must end with `/` for
    /// resource names to append rather than replace the last path segment.
    pub base_endpoint: String,
    /// Public half of the key pair — sent on the wire as `apikey`.
    pub public_key: String,
    /// Private half of the key pair. Only ever enters the MD5 digest; never
    /// appears in a URL, log line, or `Debug` output.
    pub private_key: String,
}

impl ApiConfig {
    pub fn new(
        base_endpoint: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            base_endpoint: base_endpoint.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_endpoint", &self.base_endpoint)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
