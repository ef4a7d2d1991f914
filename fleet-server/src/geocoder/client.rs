//! OpenCage geocoding HTTP client.

use std::time::Duration;

use tracing::{debug, warn};

use crate::geo::Coordinate;

use super::Geocoder;
use super::error::GeocoderError;
use super::types::parse_first_match;

/// Default base URL for the OpenCage API.
const DEFAULT_BASE_URL: &str = "https://api.opencagedata.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the OpenCage client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for OpenCage forward geocoding.
#[derive(Debug, Clone)]
pub struct OpenCageClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenCageClient {
    /// Create a new OpenCage client.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocoderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Look up `name` and return its first match.
    ///
    /// One attempt, no retries.
    pub async fn geocode(&self, name: &str) -> Result<Coordinate, GeocoderError> {
        let url = format!("{}/geocode/v1/json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", name), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocoderError::Unauthorized);
        }

        // OpenCage answers 402 once the daily quota is spent
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::PAYMENT_REQUIRED
        {
            return Err(GeocoderError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocoderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_first_match(&body, name)
    }
}

impl Geocoder for OpenCageClient {
    async fn resolve(&self, name: &str) -> Option<Coordinate> {
        match self.geocode(name).await {
            Ok(coord) => {
                debug!(%name, %coord, "geocoded place");
                Some(coord)
            }
            Err(GeocoderError::NotFound { .. }) => {
                debug!(%name, "no geocoding match");
                None
            }
            Err(e) => {
                warn!(%name, error = %e, "geocoding failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeocoderConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = GeocoderConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(3);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn client_creation() {
        let client = OpenCageClient::new(GeocoderConfig::new("test-key"));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_resolves_to_none() {
        // Port 9 (discard) on localhost is not listening
        let config = GeocoderConfig::new("test-key")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(2);
        let client = OpenCageClient::new(config).unwrap();

        assert!(client.resolve("Leeds").await.is_none());
    }
}
