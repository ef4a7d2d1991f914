//! Charging-station ranking.
//!
//! Candidates are measured from the route midpoint, cut to the battery's
//! search radius, then ordered nearest first with faster chargers winning
//! ties.

use std::cmp::Ordering;

use serde::Serialize;

use crate::chargemap::StationRecord;
use crate::geo::Coordinate;

/// A station considered for the shortlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationCandidate {
    pub name: String,
    pub coordinate: Coordinate,
    /// Great-circle distance from the route midpoint.
    pub distance_km: f64,
    /// First connector's rating, 0 when the station lists no connectors.
    pub charging_power_kw: f64,
}

/// Turn raw directory records into candidates measured from `midpoint`.
///
/// Records without a usable position, or whose first connector carries
/// no power rating, are skipped.
pub fn candidates_from_records(
    records: &[StationRecord],
    midpoint: &Coordinate,
) -> Vec<StationCandidate> {
    records
        .iter()
        .filter_map(|record| {
            let coordinate = record.position()?;
            let charging_power_kw = record.first_connector_power_kw()?;
            Some(StationCandidate {
                name: record.title().to_string(),
                coordinate,
                distance_km: midpoint.distance_km(&coordinate),
                charging_power_kw,
            })
        })
        .collect()
}

/// Order two candidates: nearer first, then higher power first.
pub fn compare_candidates(a: &StationCandidate, b: &StationCandidate) -> Ordering {
    a.distance_km
        .total_cmp(&b.distance_km)
        .then_with(|| b.charging_power_kw.total_cmp(&a.charging_power_kw))
}

/// Filter, sort and truncate candidates.
///
/// Drops anything with a non-finite distance or power, anything further
/// than `radius_km`, then returns at most `limit` entries best-first.
pub fn rank_candidates(
    candidates: Vec<StationCandidate>,
    radius_km: f64,
    limit: usize,
) -> Vec<StationCandidate> {
    let mut kept: Vec<StationCandidate> = candidates
        .into_iter()
        .filter(|c| c.distance_km.is_finite() && c.charging_power_kw.is_finite())
        .filter(|c| c.distance_km <= radius_km)
        .collect();

    kept.sort_by(compare_candidates);
    kept.truncate(limit);
    kept
}
