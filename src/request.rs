//! Request descriptors and signed-endpoint construction.
//!
//! A descriptor is an immutable value describing one API call before it is
//! signed and sent: resource name, HTTP method, caller parameters, and the
//! schema the response decodes into. [`endpoint`] turns a descriptor plus
//! config plus clock into a fully composed URL — a pure function, so two
//! calls with the same inputs yield byte-identical URLs.

use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::auth::{self, Clock};
use crate::config::ApiConfig;

/// HTTP method for one API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One API call, described before signing.
///
/// Implementations are stateless values: build one, send it, discard it.
pub trait ApiRequest {
    /// Schema the response body decodes into.
    type Response: DeserializeOwned;

    /// Resource path, resolved relative to the config's base endpoint
    /// (e.g. `"characters"` or `"characters/1011334"`).
    fn resource_name(&self) -> String;

    fn method(&self) -> Method {
        Method::Get
    }

    /// Caller query parameters, appended after the auth parameters in the
    /// order given here. Keys must be unique; `ts`, `hash` and `apikey` are
    /// reserved for signing.
    fn parameters(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// The URL for a call could not be composed. A construction failure is
/// reported before any network exchange happens.
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("invalid base endpoint `{base}`: {source}")]
    InvalidBase {
        base: String,
        source: url::ParseError,
    },

    #[error("resource `{resource}` does not resolve against the base endpoint: {source}")]
    UnresolvableResource {
        resource: String,
        source: url::ParseError,
    },
}

/// Build the fully qualified, signed URL for one descriptor.
///
/// Query items are appended in a fixed order — `ts`, `hash`, `apikey`, then
/// caller parameters in their given order. The order is a reproducibility
/// guarantee for golden-output tests; the gateway itself does not care.
pub fn endpoint<R: ApiRequest>(
    request: &R,
    config: &ApiConfig,
    clock: &dyn Clock,
) -> Result<Url, EndpointError> {
    let base = Url::parse(&config.base_endpoint).map_err(|source| EndpointError::InvalidBase {
        base: config.base_endpoint.clone(),
        source,
    })?;

    let resource = request.resource_name();
    let mut url = base
        .join(&resource)
        .map_err(|source| EndpointError::UnresolvableResource { resource, source })?;

    let signature = auth::sign(config, clock);
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(auth::TS_PARAM, &signature.timestamp);
        pairs.append_pair(auth::HASH_PARAM, &signature.digest);
        pairs.append_pair(auth::APIKEY_PARAM, &config.public_key);
        for (key, value) in request.parameters() {
            pairs.append_pair(&key, &value);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedClock;

    struct Plain {
        resource: &'static str,
        params: Vec<(String, String)>,
    }

    impl Plain {
        fn new(resource: &'static str) -> Self {
            Self {
                resource,
                params: Vec::new(),
            }
        }

        fn with_params(resource: &'static str, params: &[(&str, &str)]) -> Self {
            Self {
                resource,
                params: params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl ApiRequest for Plain {
        type Response = serde_json::Value;

        fn resource_name(&self) -> String {
            self.resource.to_string()
        }

        fn parameters(&self) -> Vec<(String, String)> {
            self.params.clone()
        }
    }

    fn config() -> ApiConfig {
        ApiConfig::new("https://example.com/v1/public/", "pub", "priv")
    }

    #[test]
    fn empty_parameters_yield_exactly_the_three_auth_items() {
        let url = endpoint(&Plain::new("characters"), &config(), &FixedClock(100.0)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/v1/public/characters\
             ?ts=100&hash=e2a25a4725deda734dfc9fcc112970e5&apikey=pub"
        );
    }

    #[test]
    fn caller_parameters_follow_auth_items_in_insertion_order() {
        let request = Plain::with_params(
            "characters",
            &[("nameStartsWith", "Spider"), ("limit", "10"), ("offset", "20")],
        );
        let url = endpoint(&request, &config(), &FixedClock(100.0)).unwrap();

        let keys: Vec<String> = url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(
            keys,
            ["ts", "hash", "apikey", "nameStartsWith", "limit", "offset"]
        );
    }

    #[test]
    fn fixed_keys_appear_exactly_once_even_with_caller_parameters() {
        let request = Plain::with_params("comics", &[("format", "comic")]);
        let url = endpoint(&request, &config(), &FixedClock(7.0)).unwrap();

        for fixed in ["ts", "hash", "apikey"] {
            let count = url.query_pairs().filter(|(k, _)| k == fixed).count();
            assert_eq!(count, 1, "{fixed} must appear exactly once");
        }
    }

    #[test]
    fn building_twice_with_the_same_clock_is_byte_identical() {
        let request = Plain::with_params("characters", &[("limit", "5")]);
        let clock = FixedClock(1589464917.5);
        let first = endpoint(&request, &config(), &clock).unwrap();
        let second = endpoint(&request, &config(), &clock).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn parameter_values_are_percent_encoded() {
        let request = Plain::with_params("characters", &[("name", "Luke Cage")]);
        let url = endpoint(&request, &config(), &FixedClock(1.0)).unwrap();
        assert!(url.query().unwrap().contains("name=Luke+Cage"));
    }

    #[test]
    fn invalid_base_is_a_construction_error() {
        let config = ApiConfig::new("not a url", "pub", "priv");
        let err = endpoint(&Plain::new("characters"), &config, &FixedClock(1.0)).unwrap_err();
        assert!(matches!(err, EndpointError::InvalidBase { .. }));
    }

    #[test]
    fn unresolvable_resource_is_a_construction_error() {
        // mailto: URLs cannot be a base, so relative resolution fails.
        let config = ApiConfig::new("mailto:ops@example.com", "pub", "priv");
        let err = endpoint(&Plain::new("characters"), &config, &FixedClock(1.0)).unwrap_err();
        assert!(matches!(err, EndpointError::UnresolvableResource { .. }));
    }

    #[test]
    fn resource_resolves_relative_to_the_base_path() {
        let url = endpoint(
            &Plain::new("characters/1011334"),
            &config(),
            &FixedClock(1.0),
        )
        .unwrap();
        assert_eq!(url.path(), "/v1/public/characters/1011334");
    }
}
