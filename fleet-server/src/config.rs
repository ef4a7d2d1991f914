//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use crate::chargemap::DirectoryConfig;
use crate::geocoder::GeocoderConfig;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_ENERGY_CSV: &str = "operational_Cost.csv";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("FLEET_BIND_ADDR is not a socket address: {value:?}")]
    InvalidBindAddr { value: String },

    #[error("FLEET_HTTP_TIMEOUT_SECS is not a positive integer: {value:?}")]
    InvalidTimeout { value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenCage key (`OPENCAGE_API_KEY`)
    pub opencage_api_key: String,
    /// Open Charge Map key (`OPENCHARGEMAP_API_KEY`)
    pub openchargemap_api_key: String,
    /// Listen address (`FLEET_BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// Static assets directory (`FLEET_STATIC_DIR`)
    pub static_dir: String,
    /// Energy dataset path (`FLEET_ENERGY_CSV`)
    pub energy_csv: PathBuf,
    /// Timeout for each upstream request (`FLEET_HTTP_TIMEOUT_SECS`)
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let opencage_api_key = lookup("OPENCAGE_API_KEY").unwrap_or_else(|| {
            warn!("OPENCAGE_API_KEY not set; geocoding will fail");
            String::new()
        });
        let openchargemap_api_key = lookup("OPENCHARGEMAP_API_KEY").unwrap_or_else(|| {
            warn!("OPENCHARGEMAP_API_KEY not set; station lookups will fail");
            String::new()
        });

        let bind_raw = lookup("FLEET_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_raw })?;

        let http_timeout_secs = match lookup("FLEET_HTTP_TIMEOUT_SECS") {
            None => DEFAULT_HTTP_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout { value: raw }),
            },
        };

        Ok(Self {
            opencage_api_key,
            openchargemap_api_key,
            bind_addr,
            static_dir: lookup("FLEET_STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            energy_csv: lookup("FLEET_ENERGY_CSV")
                .unwrap_or_else(|| DEFAULT_ENERGY_CSV.to_string())
                .into(),
            http_timeout_secs,
        })
    }

    /// Geocoder client settings.
    pub fn geocoder(&self) -> GeocoderConfig {
        GeocoderConfig::new(&self.opencage_api_key).with_timeout(self.http_timeout_secs)
    }

    /// Station directory client settings.
    pub fn directory(&self) -> DirectoryConfig {
        DirectoryConfig::new(&self.openchargemap_api_key).with_timeout(self.http_timeout_secs)
    }
}
