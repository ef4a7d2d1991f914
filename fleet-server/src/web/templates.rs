//! Askama templates for the web frontend.

use askama::Template;

use crate::advisor::StationCandidate;
use crate::fleet::Vehicle;
use crate::health::HealthAssessment;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Route optimisation form and results.
#[derive(Template, Default)]
#[template(path = "route_optimization.html")]
pub struct RouteTemplate {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub stations: Vec<StationView>,
    pub error: Option<String>,
}

/// Battery health form and result.
#[derive(Template, Default)]
#[template(path = "battery_health_status.html")]
pub struct BatteryHealthTemplate {
    pub result: Option<HealthView>,
    pub error: Option<String>,
}

/// User registration form.
#[derive(Template, Default)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

/// Shown when the email is already registered.
#[derive(Template)]
#[template(path = "already_exists.html")]
pub struct AlreadyExistsTemplate;

/// Login form.
#[derive(Template, Default)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Post-login landing page.
#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub username: String,
}

/// Vehicle registration form.
#[derive(Template, Default)]
#[template(path = "register_vehicle.html")]
pub struct RegisterVehicleTemplate {
    pub error: Option<String>,
}

/// Vehicle status table.
#[derive(Template, Default)]
#[template(path = "vehicle_status.html")]
pub struct VehicleStatusTemplate {
    pub vehicles: Vec<Vehicle>,
    pub notice: Option<String>,
}

/// Energy consumption charts.
#[derive(Template, Default)]
#[template(path = "energy_consumption.html")]
pub struct EnergyTemplate {
    /// JSON for the line chart, embedded in a script block
    pub line_chart_data: String,
    /// JSON for the pie chart, embedded in a script block
    pub pie_chart_data: String,
    pub error: Option<String>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub distance: String,
    pub charging_speed: String,
}

impl StationView {
    /// Create from a ranked candidate.
    pub fn from_candidate(candidate: &StationCandidate) -> Self {
        Self {
            name: candidate.name.clone(),
            latitude: format!("{:.5}", candidate.coordinate.latitude),
            longitude: format!("{:.5}", candidate.coordinate.longitude),
            distance: format!("{:.2} km", candidate.distance_km),
            charging_speed: format_power(candidate.charging_power_kw),
        }
    }
}

/// Battery health view model.
#[derive(Debug, Clone)]
pub struct HealthView {
    pub status: String,
    pub score: String,
    /// CSS modifier: `good`, `moderate` or `poor`
    pub css_class: String,
}

impl HealthView {
    /// Create from an assessment.
    pub fn from_assessment(assessment: &HealthAssessment) -> Self {
        let status = assessment.status.to_string();
        Self {
            css_class: status.to_lowercase(),
            status,
            score: format!("{:.2}", assessment.score),
        }
    }
}

/// Human readable charger power; stations without connectors show "Unknown".
fn format_power(kw: f64) -> String {
    if kw > 0.0 {
        format!("{kw} kW")
    } else {
        "Unknown".to_string()
    }
}
