//! Route advisor: charging stops near the middle of a trip.

use serde::Serialize;
use tracing::{debug, info};

use crate::chargemap::{StationDirectory, StationQuery};
use crate::geo::Coordinate;
use crate::geocoder::Geocoder;

use super::battery::BatteryLevel;
use super::config::AdvisorConfig;
use super::rank::{StationCandidate, candidates_from_records, rank_candidates};

/// Why a route could not be planned.
///
/// The messages are user-facing and rendered as-is by the web layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Source or destination left blank
    #[error("Both source and destination cities are required.")]
    MissingCity,

    /// Source or destination could not be geocoded
    #[error("Invalid source or destination city.")]
    InvalidCity,

    /// Nothing suitable within range (includes an unparseable battery level)
    #[error("No EV stations found along the route.")]
    NoStations,
}

/// A planned route with its recommended charging stops.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub source: String,
    pub destination: String,
    pub source_coordinate: Coordinate,
    pub destination_coordinate: Coordinate,
    pub midpoint: Coordinate,
    /// Best-first, never empty.
    pub stations: Vec<StationCandidate>,
}

/// Finds charging stations for a trip.
///
/// Generic over its two upstream collaborators so tests can swap in
/// in-memory versions.
#[derive(Debug, Clone)]
pub struct RouteAdvisor<G, D> {
    geocoder: G,
    directory: D,
    config: AdvisorConfig,
}

impl<G: Geocoder, D: StationDirectory> RouteAdvisor<G, D> {
    /// Create an advisor over the given geocoder and directory.
    pub fn new(geocoder: G, directory: D, config: AdvisorConfig) -> Self {
        Self {
            geocoder,
            directory,
            config,
        }
    }

    /// The geocoder used to resolve place names.
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// The station directory queried for candidates.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Up to `shortlist_len` stations around the midpoint of a trip.
    ///
    /// An unparseable `battery_raw` or a failed directory lookup gives an
    /// empty list rather than an error.
    pub async fn find_best_stations(
        &self,
        source: Coordinate,
        destination: Coordinate,
        battery_raw: &str,
    ) -> Vec<StationCandidate> {
        let midpoint = source.midpoint(&destination);

        let battery = match BatteryLevel::parse(battery_raw) {
            Ok(b) => b,
            Err(e) => {
                debug!(error = %e, "skipping station search");
                return Vec::new();
            }
        };

        let radius_km = battery.search_radius_km(self.config.full_charge_range_km);

        let query = StationQuery {
            center: midpoint,
            radius_km,
            max_results: self.config.max_directory_results,
        };
        let records = self.directory.nearby(&query).await;

        let candidates = candidates_from_records(&records, &midpoint);
        let ranked = rank_candidates(candidates, radius_km, self.config.shortlist_len);

        debug!(
            %midpoint,
            %battery,
            radius_km,
            fetched = records.len(),
            kept = ranked.len(),
            "ranked stations"
        );

        ranked
    }

    /// Plan a trip between two named places.
    ///
    /// `battery_raw` of `None` means the caller supplied no value and the
    /// default charge applies.
    pub async fn plan(
        &self,
        source_name: &str,
        destination_name: &str,
        battery_raw: Option<&str>,
    ) -> Result<RoutePlan, RouteError> {
        let source_name = source_name.trim();
        let destination_name = destination_name.trim();

        if source_name.is_empty() || destination_name.is_empty() {
            return Err(RouteError::MissingCity);
        }

        let source = self
            .geocoder
            .resolve(source_name)
            .await
            .ok_or(RouteError::InvalidCity)?;
        let destination = self
            .geocoder
            .resolve(destination_name)
            .await
            .ok_or(RouteError::InvalidCity)?;

        let battery_raw = battery_raw
            .map(str::to_string)
            .unwrap_or_else(|| BatteryLevel::default().percent().to_string());

        let stations = self
            .find_best_stations(source, destination, &battery_raw)
            .await;

        if stations.is_empty() {
            return Err(RouteError::NoStations);
        }

        info!(
            source = source_name,
            destination = destination_name,
            stations = stations.len(),
            "planned route"
        );

        Ok(RoutePlan {
            source: source_name.to_string(),
            destination: destination_name.to_string(),
            source_coordinate: source,
            destination_coordinate: destination,
            midpoint: source.midpoint(&destination),
            stations,
        })
    }
}
