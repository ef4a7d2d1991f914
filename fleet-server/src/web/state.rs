//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::advisor::RouteAdvisor;
use crate::chargemap::OpenChargeMapClient;
use crate::fleet::FleetStore;
use crate::geocoder::OpenCageClient;

/// Route advisor wired to the production upstreams.
pub type LiveAdvisor = RouteAdvisor<OpenCageClient, OpenChargeMapClient>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Charging-stop recommendations
    pub advisor: Arc<LiveAdvisor>,

    /// Registered users and vehicles
    pub fleet: FleetStore,

    /// Energy dataset, re-read on every dashboard request
    pub energy_csv: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(advisor: LiveAdvisor, fleet: FleetStore, energy_csv: impl Into<PathBuf>) -> Self {
        Self {
            advisor: Arc::new(advisor),
            fleet,
            energy_csv: Arc::new(energy_csv.into()),
        }
    }
}
