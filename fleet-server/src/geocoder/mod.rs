//! Place-name geocoding.
//!
//! Turns a free-text place name into a [`Coordinate`]. The route advisor
//! only needs "found" or "not found", so the [`Geocoder`] trait collapses
//! every failure into `None`; the concrete client keeps the detailed error
//! for logging.

mod client;
mod error;
mod types;

use std::future::Future;

use crate::geo::Coordinate;

pub use client::{GeocoderConfig, OpenCageClient};
pub use error::GeocoderError;
pub use types::{GeocodeResponse, GeocodeResult, Geometry, parse_first_match};

/// Resolves place names to coordinates.
pub trait Geocoder: Send + Sync {
    /// Resolve `name` to the position of its best match.
    ///
    /// Returns `None` on no match, upstream failure, or timeout.
    fn resolve(&self, name: &str) -> impl Future<Output = Option<Coordinate>> + Send;
}
