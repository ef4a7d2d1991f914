//! Great-circle distance.

/// Mean Earth radius used for all distance calculations, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
///
/// Uses the haversine formula. Inputs are in degrees and are not range
/// checked: out-of-range values give a well-defined but geographically
/// meaningless result.
///
/// # Examples
///
/// ```
/// use fleet_server::geo::haversine_km;
///
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.19).abs() < 0.5);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for near-antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn same_point_is_zero() {
        assert_eq!(haversine_km(51.5, -0.12, 51.5, -0.12), 0.0);
    }

    #[test]
    fn london_to_paris() {
        // Roughly 344 km between the two city centres
        let d = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((d - 343.5).abs() < 2.0, "got {d}");
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn latitude() -> impl Strategy<Value = f64> {
        -90.0f64..=90.0
    }

    fn longitude() -> impl Strategy<Value = f64> {
        -180.0f64..=180.0
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(lat in latitude(), lon in longitude()) {
            prop_assert!(haversine_km(lat, lon, lat, lon).abs() < 1e-9);
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in latitude(),
            lon1 in longitude(),
            lat2 in latitude(),
            lon2 in longitude(),
        ) {
            let ab = haversine_km(lat1, lon1, lat2, lon2);
            let ba = haversine_km(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-6, "{ab} != {ba}");
        }

        #[test]
        fn distance_is_bounded(
            lat1 in latitude(),
            lon1 in longitude(),
            lat2 in latitude(),
            lon2 in longitude(),
        ) {
            let d = haversine_km(lat1, lon1, lat2, lon2);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }
    }
}
