//! Geographic primitives.
//!
//! Coordinates are plain latitude/longitude pairs in degrees. Distances
//! are great-circle distances on a spherical Earth.

mod coordinate;
mod distance;

pub use coordinate::Coordinate;
pub use distance::{EARTH_RADIUS_KM, haversine_km};
