use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fleet_server::advisor::{AdvisorConfig, RouteAdvisor};
use fleet_server::chargemap::OpenChargeMapClient;
use fleet_server::config::AppConfig;
use fleet_server::fleet::FleetStore;
use fleet_server::geocoder::OpenCageClient;
use fleet_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let geocoder = match OpenCageClient::new(config.geocoder()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create geocoder client");
            return ExitCode::FAILURE;
        }
    };
    let directory = match OpenChargeMapClient::new(config.directory()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create station directory client");
            return ExitCode::FAILURE;
        }
    };

    let advisor = RouteAdvisor::new(geocoder, directory, AdvisorConfig::default());
    let state = AppState::new(advisor, FleetStore::new(), config.energy_csv.clone());
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("EV fleet dashboard listening on http://{addr}");
    info!("  GET  /health               - Health check");
    info!("  POST /route_optimization   - Recommend charging stations");
    info!("  POST /battery_health_status - Score a battery");
    info!("  POST /generate_report      - Real-time report");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
