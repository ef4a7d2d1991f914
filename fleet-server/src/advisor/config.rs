//! Route advisor configuration.

/// Policy constants for station ranking.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Driving range on a full battery, in kilometres.
    /// The search radius scales linearly with charge.
    pub full_charge_range_km: f64,

    /// How many raw records to ask the directory for.
    pub max_directory_results: usize,

    /// How many ranked stations to return.
    pub shortlist_len: usize,
}

impl AdvisorConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        full_charge_range_km: f64,
        max_directory_results: usize,
        shortlist_len: usize,
    ) -> Self {
        Self {
            full_charge_range_km,
            max_directory_results,
            shortlist_len,
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            full_charge_range_km: 300.0,
            max_directory_results: 10,
            shortlist_len: 3,
        }
    }
}
