//! Latitude/longitude pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::distance::haversine_km;

/// A point on the Earth's surface, in degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180], but
/// nothing enforces it. Values come from the geocoder and are trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another coordinate, in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// Arithmetic mean of two coordinates.
    ///
    /// This is a planar approximation rather than the geodesic midpoint.
    /// It drifts on long routes and is wrong across the antimeridian
    /// (e.g. 179° and -179° average to 0°).
    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}
