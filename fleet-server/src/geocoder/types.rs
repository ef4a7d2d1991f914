//! OpenCage forward-geocoding response types.
//!
//! Only the fields needed to pull out the first match's position are
//! modelled; everything else in the payload is ignored.

use serde::Deserialize;

use crate::geo::Coordinate;

use super::error::GeocoderError;

/// Top-level geocoding response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// A single candidate match.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,

    /// Human readable place name, e.g. "Leeds, United Kingdom"
    #[serde(default)]
    pub formatted: Option<String>,
}

/// Position of a match.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeResponse {
    /// The first (best) match, if any.
    pub fn first_match(&self) -> Option<Coordinate> {
        self.results
            .first()
            .map(|r| Coordinate::new(r.geometry.lat, r.geometry.lng))
    }
}

/// Parse a response body and take the first match.
pub fn parse_first_match(body: &str, query: &str) -> Result<Coordinate, GeocoderError> {
    let response: GeocodeResponse =
        serde_json::from_str(body).map_err(|e| GeocoderError::Json {
            message: e.to_string(),
        })?;

    response.first_match().ok_or_else(|| GeocoderError::NotFound {
        query: query.to_string(),
    })
}
