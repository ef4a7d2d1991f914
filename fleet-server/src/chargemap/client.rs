//! Open Charge Map HTTP client.

use std::time::Duration;

use tracing::{debug, warn};

use super::error::DirectoryError;
use super::types::{StationRecord, parse_stations};
use super::{StationDirectory, StationQuery};

/// Default base URL for the Open Charge Map API.
const DEFAULT_BASE_URL: &str = "https://api.openchargemap.io";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Open Charge Map client.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectoryConfig {
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

/// Client for the Open Charge Map POI endpoint.
#[derive(Debug, Clone)]
pub struct OpenChargeMapClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenChargeMapClient {
    /// Create a new Open Charge Map client.
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch raw POI records around the query centre.
    pub async fn fetch_nearby(
        &self,
        query: &StationQuery,
    ) -> Result<Vec<StationRecord>, DirectoryError> {
        let url = format!("{}/v3/poi/", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.clone()),
                ("latitude", query.center.latitude.to_string()),
                ("longitude", query.center.longitude.to_string()),
                ("distance", query.radius_km.to_string()),
                ("distanceunit", "km".to_string()),
                ("maxresults", query.max_results.to_string()),
                ("compact", "true".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectoryError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectoryError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_stations(&body)
    }
}

impl StationDirectory for OpenChargeMapClient {
    async fn nearby(&self, query: &StationQuery) -> Vec<StationRecord> {
        match self.fetch_nearby(query).await {
            Ok(stations) => {
                debug!(
                    center = %query.center,
                    radius_km = query.radius_km,
                    count = stations.len(),
                    "fetched stations"
                );
                stations
            }
            Err(e) => {
                warn!(center = %query.center, error = %e, "station lookup failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    #[test]
    fn config_defaults() {
        let config = DirectoryConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = DirectoryConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[tokio::test]
    async fn unreachable_host_yields_no_stations() {
        let config = DirectoryConfig::new("test-key")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(2);
        let client = OpenChargeMapClient::new(config).unwrap();

        let query = StationQuery {
            center: Coordinate::new(53.8, -1.55),
            radius_km: 50.0,
            max_results: 10,
        };

        assert!(client.nearby(&query).await.is_empty());
    }
}
