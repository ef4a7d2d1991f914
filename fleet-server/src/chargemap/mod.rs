//! Charging-station directory.
//!
//! Answers "which charging stations are within this radius of this
//! point?". The [`StationDirectory`] trait is what the route advisor
//! depends on; [`OpenChargeMapClient`] is the production implementation.

mod client;
mod error;
mod types;

use std::future::Future;

use crate::geo::Coordinate;

pub use client::{DirectoryConfig, OpenChargeMapClient};
pub use error::DirectoryError;
pub use types::{AddressInfo, Connection, StationRecord, UNKNOWN_STATION, parse_stations};

/// A circular area search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationQuery {
    /// Centre of the search circle.
    pub center: Coordinate,

    /// Search radius in kilometres.
    pub radius_km: f64,

    /// Maximum number of raw records to request.
    pub max_results: usize,
}

/// Looks up charging stations near a point.
pub trait StationDirectory: Send + Sync {
    /// Stations inside the query circle, in directory order.
    ///
    /// Upstream failures and timeouts yield an empty list.
    fn nearby(&self, query: &StationQuery) -> impl Future<Output = Vec<StationRecord>> + Send;
}
