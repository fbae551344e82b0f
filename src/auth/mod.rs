//! Request signing — the `ts`/`hash`/`apikey` scheme.
//!
//! Every call to the gateway carries three query parameters: the current
//! timestamp, the lowercase-hex MD5 of `timestamp + private_key + public_key`
//! (fixed order, no delimiter), and the public key. MD5 here is a shared-secret
//! handshake mandated by the gateway, not an integrity mechanism — swapping in
//! a stronger digest would break compatibility.
//!
//! Wall-clock access goes through the [`Clock`] trait so signing stays a pure
//! function of its inputs.

use crate::config::ApiConfig;

/// Query parameter carrying the timestamp.
pub const TS_PARAM: &str = "ts";
/// Query parameter carrying the MD5 digest.
pub const HASH_PARAM: &str = "hash";
/// Query parameter carrying the public key.
pub const APIKEY_PARAM: &str = "apikey";

/// Source of the current time for signing.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch. Fractional part allowed.
    fn unix_timestamp(&self) -> f64;
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> f64 {
        chrono::Utc::now().timestamp_micros() as f64 / 1e6
    }
}

/// Clock pinned to one instant. Two signatures taken with the same
/// `FixedClock` are byte-identical, which golden-output tests rely on.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> f64 {
        self.0
    }
}

/// One signature: the timestamp string sent as `ts` and the digest sent as
/// `hash`. Both derive from the same clock reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub timestamp: String,
    pub digest: String,
}

/// Lowercase hex MD5 of `timestamp + private_key + public_key`.
pub fn digest(timestamp: &str, private_key: &str, public_key: &str) -> String {
    let input = format!("{timestamp}{private_key}{public_key}");
    format!("{:x}", md5::compute(input))
}

/// Capture the clock and sign with the config's key pair.
pub fn sign(config: &ApiConfig, clock: &dyn Clock) -> Signature {
    let timestamp = format!("{}", clock.unix_timestamp());
    let digest = digest(&timestamp, &config.private_key, &config.public_key);
    Signature { timestamp, digest }
}
