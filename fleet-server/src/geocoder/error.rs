//! Geocoder error types.

/// Errors that can occur when resolving a place name.
#[derive(Debug, thiserror::Error)]
pub enum GeocoderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API key rejected
    #[error("unauthorized: check OPENCAGE_API_KEY")]
    Unauthorized,

    /// Daily quota exhausted or request rate too high
    #[error("rate limited by geocoding API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The query matched nothing
    #[error("no match for {query:?}")]
    NotFound { query: String },
}
