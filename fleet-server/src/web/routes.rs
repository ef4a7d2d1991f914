//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::advisor::{RouteError, RoutePlan};
use crate::energy::{EnergyDashboard, EnergyError};
use crate::fleet::{FleetError, NewUser, NewVehicle};
use crate::health::BatteryReading;
use crate::report::{ReportFormat, real_time_report};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/health", get(health))
        .route(
            "/route_optimization",
            get(route_page).post(route_optimization),
        )
        .route(
            "/battery_health_status",
            get(battery_health_page).post(battery_health_status),
        )
        .route("/register", get(register_page).post(register_user))
        .route("/login", get(login_page).post(login))
        .route(
            "/register_vehicle",
            get(register_vehicle_page).post(register_vehicle),
        )
        .route("/vehicle_status", get(vehicle_status))
        .route("/energy_consumption", get(energy_consumption))
        .route("/generate_report", post(generate_report))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Render a template, mapping failures to a 500.
fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page.
async fn home_page() -> Result<Html<String>, AppError> {
    render(&HomeTemplate)
}

// ============================================================================
// Route optimisation
// ============================================================================

/// Empty route optimisation form.
async fn route_page() -> Result<Html<String>, AppError> {
    render(&RouteTemplate::default())
}

/// Recommend charging stations between two places.
///
/// Browsers get the form page back with results or an inline error;
/// other clients get JSON.
async fn route_optimization(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(req): Form<RouteRequest>,
) -> Result<Response, AppError> {
    let outcome = state
        .advisor
        .plan(&req.source_city, &req.destination_city, req.battery.as_deref())
        .await;

    route_response(outcome, accepts_html(&headers))
}

/// Shape a planning outcome: the form page when `html`, JSON otherwise.
fn route_response(
    outcome: Result<RoutePlan, RouteError>,
    html: bool,
) -> Result<Response, AppError> {
    if html {
        let template = match &outcome {
            Ok(plan) => route_template(plan),
            Err(e) => RouteTemplate {
                error: Some(e.to_string()),
                ..Default::default()
            },
        };
        return Ok(render(&template)?.into_response());
    }

    let plan = outcome.map_err(AppError::from)?;
    Ok(Json(RouteResponse::from_plan(&plan)).into_response())
}

fn route_template(plan: &RoutePlan) -> RouteTemplate {
    RouteTemplate {
        source: Some(plan.source.clone()),
        destination: Some(plan.destination.clone()),
        stations: plan
            .stations
            .iter()
            .map(StationView::from_candidate)
            .collect(),
        error: None,
    }
}

// ============================================================================
// Battery health
// ============================================================================

/// Empty battery health form.
async fn battery_health_page() -> Result<Html<String>, AppError> {
    render(&BatteryHealthTemplate::default())
}

/// Score a battery reading.
async fn battery_health_status(
    headers: HeaderMap,
    Form(req): Form<BatteryHealthRequest>,
) -> Result<Response, AppError> {
    let assessment = BatteryReading::parse(&req.capacity, &req.voltage, &req.temperature)
        .map(|reading| reading.assess());

    if accepts_html(&headers) {
        let template = match &assessment {
            Ok(a) => BatteryHealthTemplate {
                result: Some(HealthView::from_assessment(a)),
                error: None,
            },
            Err(e) => BatteryHealthTemplate {
                result: None,
                error: Some(e.to_string()),
            },
        };
        return Ok(render(&template)?.into_response());
    }

    let assessment = assessment.map_err(|e| AppError::BadRequest {
        message: format!("{e} ({} is not a number)", e.field),
    })?;
    Ok(Json(BatteryHealthResponse::from_assessment(&assessment)).into_response())
}

// ============================================================================
// Users
// ============================================================================

/// Empty registration form.
async fn register_page() -> Result<Html<String>, AppError> {
    render(&RegisterTemplate::default())
}

/// Create a user account, then send the browser to the login page.
async fn register_user(
    State(state): State<AppState>,
    Form(form): Form<NewUser>,
) -> Result<Response, AppError> {
    match state.fleet.register_user(&form).await {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(FleetError::UserExists) => Ok(render(&AlreadyExistsTemplate)?.into_response()),
        Err(FleetError::Hash(message)) => Err(AppError::Internal { message }),
        Err(e) => Ok(render(&RegisterTemplate {
            error: Some(e.to_string()),
        })?
        .into_response()),
    }
}

/// Empty login form.
async fn login_page() -> Result<Html<String>, AppError> {
    render(&LoginTemplate::default())
}

/// Check credentials and greet the user.
async fn login(
    State(state): State<AppState>,
    Form(req): Form<LoginRequest>,
) -> Result<Html<String>, AppError> {
    match state.fleet.authenticate(&req.email, &req.password).await {
        Ok(user) => {
            info!(user_id = user.id, "login succeeded");
            render(&SuccessTemplate {
                username: user.username,
            })
        }
        Err(e) => render(&LoginTemplate {
            error: Some(e.to_string()),
        }),
    }
}

// ============================================================================
// Vehicles
// ============================================================================

/// Empty vehicle registration form.
async fn register_vehicle_page() -> Result<Html<String>, AppError> {
    render(&RegisterVehicleTemplate::default())
}

/// Register a vehicle and show the updated fleet.
async fn register_vehicle(
    State(state): State<AppState>,
    Form(form): Form<NewVehicle>,
) -> Result<Html<String>, AppError> {
    let now = Local::now().naive_local();

    match state.fleet.register_vehicle(form, now).await {
        Ok(_) => render(&VehicleStatusTemplate {
            vehicles: state.fleet.vehicles().await,
            notice: Some("Vehicle registered successfully!".to_string()),
        }),
        Err(e) => render(&RegisterVehicleTemplate {
            error: Some(e.to_string()),
        }),
    }
}

/// Table of all registered vehicles.
async fn vehicle_status(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&VehicleStatusTemplate {
        vehicles: state.fleet.vehicles().await,
        notice: None,
    })
}

// ============================================================================
// Energy & reports
// ============================================================================

/// Energy consumption charts, read fresh from the dataset each time.
async fn energy_consumption(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.energy_csv.clone();
    let loaded = tokio::task::spawn_blocking(move || EnergyDashboard::load(path.as_path()))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("energy loader panicked: {e}"),
        })?;

    let template = match loaded {
        Ok(dashboard) => EnergyTemplate {
            line_chart_data: to_json(&dashboard.line)?,
            pie_chart_data: to_json(&dashboard.pie)?,
            error: None,
        },
        Err(e) => {
            warn!(path = %state.energy_csv.display(), error = %e, "energy dataset unavailable");
            EnergyTemplate {
                error: Some(energy_message(&e)),
                ..Default::default()
            }
        }
    };

    render(&template)
}

fn energy_message(e: &EnergyError) -> String {
    match e {
        EnergyError::Io(_) => "Energy data is not available.".to_string(),
        _ => format!("Energy data could not be read: {e}"),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::Internal {
        message: format!("JSON encode error: {e}"),
    })
}

/// Assemble the real-time report in the requested format.
async fn generate_report(Json(req): Json<ReportRequest>) -> Result<Response, AppError> {
    let format: ReportFormat = req
        .report_type
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e: crate::report::InvalidReportType| AppError::BadRequest {
            message: e.to_string(),
        })?;

    Ok(Json(real_time_report(format)).into_response())
}

// ============================================================================
// Errors
// ============================================================================

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::MissingCity | RouteError::InvalidCity => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::NoStations => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
