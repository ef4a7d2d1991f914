//! Charging-stop recommendations for a trip.
//!
//! Given two place names and a battery level, the advisor geocodes both
//! ends, searches for chargers around the (planar) midpoint within the
//! range the battery allows, and returns the closest few.
//!
//! The search centre is a single midpoint rather than points sampled
//! along the route, so long trips only see chargers near the middle.

mod battery;
mod config;
mod rank;
mod route;


pub use battery::{BatteryLevel, DEFAULT_BATTERY_PERCENT, InvalidBatteryLevel};
pub use config::AdvisorConfig;
pub use rank::{StationCandidate, candidates_from_records, compare_candidates, rank_candidates};
pub use route::{RouteAdvisor, RouteError, RoutePlan};
