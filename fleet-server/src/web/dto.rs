//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::advisor::{RoutePlan, StationCandidate};
use crate::health::HealthAssessment;

/// Route optimisation form (or query string).
#[derive(Debug, Default, Deserialize)]
pub struct RouteRequest {
    /// Starting place name
    #[serde(default)]
    pub source_city: String,

    /// Destination place name
    #[serde(default)]
    pub destination_city: String,

    /// Battery percentage as typed; absent means the default charge
    pub battery: Option<String>,
}

/// A recommended charging station.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station title
    pub name: String,

    /// Station latitude
    pub latitude: f64,

    /// Station longitude
    pub longitude: f64,

    /// Distance from the route midpoint in km
    pub distance_km: f64,

    /// First connector's power in kW (0 if the station lists no connectors)
    pub charging_power_kw: f64,
}

/// Response for route optimisation.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Source as entered (trimmed)
    pub source: String,

    /// Destination as entered (trimmed)
    pub destination: String,

    /// Best stations first
    pub stations: Vec<StationResult>,
}

/// Battery health form. Fields stay text so bad input can be reported.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BatteryHealthRequest {
    pub capacity: String,
    pub voltage: String,
    pub temperature: String,
}

/// Battery health result.
#[derive(Debug, Serialize)]
pub struct BatteryHealthResponse {
    pub health_status: String,
    pub health_score: f64,
}

/// Login form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Report export request.
#[derive(Debug, Default, Deserialize)]
pub struct ReportRequest {
    /// `"pdf"` or `"ppt"`
    pub report_type: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a ranked candidate.
    pub fn from_candidate(candidate: &StationCandidate) -> Self {
        Self {
            name: candidate.name.clone(),
            latitude: candidate.coordinate.latitude,
            longitude: candidate.coordinate.longitude,
            distance_km: candidate.distance_km,
            charging_power_kw: candidate.charging_power_kw,
        }
    }
}

impl RouteResponse {
    /// Create from a planned route.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            source: plan.source.clone(),
            destination: plan.destination.clone(),
            stations: plan
                .stations
                .iter()
                .map(StationResult::from_candidate)
                .collect(),
        }
    }
}

impl BatteryHealthResponse {
    /// Create from an assessment.
    pub fn from_assessment(assessment: &HealthAssessment) -> Self {
        Self {
            health_status: assessment.status.to_string(),
            health_score: assessment.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::health::HealthStatus;

    fn plan() -> RoutePlan {
        RoutePlan {
            source: "Leeds".into(),
            destination: "York".into(),
            source_coordinate: Coordinate::new(53.8, -1.55),
            destination_coordinate: Coordinate::new(53.96, -1.08),
            midpoint: Coordinate::new(53.88, -1.315),
            stations: vec![StationCandidate {
                name: "Tadcaster Services".into(),
                coordinate: Coordinate::new(53.88, -1.26),
                distance_km: 3.6,
                charging_power_kw: 150.0,
            }],
        }
    }

    #[test]
    fn route_response_from_plan() {
        let response = RouteResponse::from_plan(&plan());

        assert_eq!(response.source, "Leeds");
        assert_eq!(response.destination, "York");
        assert_eq!(response.stations.len(), 1);
        assert_eq!(response.stations[0].name, "Tadcaster Services");
        assert_eq!(response.stations[0].latitude, 53.88);
        assert_eq!(response.stations[0].charging_power_kw, 150.0);
    }

    #[test]
    fn route_response_json_shape() {
        let json = serde_json::to_value(RouteResponse::from_plan(&plan())).unwrap();
        assert_eq!(json["stations"][0]["distance_km"], 3.6);
        assert_eq!(json["stations"][0]["longitude"], -1.26);
    }

    #[test]
    fn route_request_defaults_missing_fields() {
        let req: RouteRequest = serde_json::from_str(r#"{"source_city": "Leeds"}"#).unwrap();
        assert_eq!(req.source_city, "Leeds");
        assert_eq!(req.destination_city, "");
        assert_eq!(req.battery, None);
    }

    #[test]
    fn battery_health_response_from_assessment() {
        let response = BatteryHealthResponse::from_assessment(&HealthAssessment {
            score: 0.9,
            status: HealthStatus::Good,
        });
        assert_eq!(response.health_status, "Good");
        assert_eq!(response.health_score, 0.9);
    }

    #[test]
    fn report_request_without_type() {
        let req: ReportRequest = serde_json::from_str("{}").unwrap();
        assert!(req.report_type.is_none());
    }
}
