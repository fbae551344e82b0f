//! Network URL constants for the Marvel SDK.

/// Default REST API base endpoint. Requests resolve resource names relative
/// to this URL, so the trailing slash is load-bearing.
pub const DEFAULT_API_URL: &str = "https://gateway.marvel.com/v1/public/";
