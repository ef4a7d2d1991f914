//! Fleet vehicles.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::FleetError;
use super::user::required;

/// Location recorded when the form leaves it blank.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Timestamp format for `last_updated`.
pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A registered vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub owner_name: String,
    pub registration_number: String,
    /// State of charge, percent.
    pub battery_status: i64,
    /// Last reported speed, km/h.
    pub speed: i64,
    pub location: String,
    pub last_updated: String,
}

/// Vehicle registration form. Numbers arrive as text; missing fields are blank.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewVehicle {
    pub vehicle_id: String,
    pub owner_name: String,
    pub registration_number: String,
    pub battery_status: String,
    pub speed: String,
    pub location: String,
}

impl NewVehicle {
    /// Validate the form and stamp it with `now`.
    pub fn into_vehicle(self, now: NaiveDateTime) -> Result<Vehicle, FleetError> {
        let location = match self.location.trim() {
            "" => UNKNOWN_LOCATION.to_string(),
            loc => loc.to_string(),
        };

        Ok(Vehicle {
            vehicle_id: required(&self.vehicle_id, "Vehicle ID")?,
            owner_name: required(&self.owner_name, "Owner name")?,
            registration_number: required(&self.registration_number, "Registration number")?,
            battery_status: parse_whole(&self.battery_status, "Battery status")?,
            speed: parse_whole(&self.speed, "Speed")?,
            location,
            last_updated: now.format(LAST_UPDATED_FORMAT).to_string(),
        })
    }
}

fn parse_whole(raw: &str, field: &'static str) -> Result<i64, FleetError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FleetError::InvalidNumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap()
    }

    fn form() -> NewVehicle {
        NewVehicle {
            vehicle_id: "EV-001".into(),
            owner_name: "Ada".into(),
            registration_number: "AB12 CDE".into(),
            battery_status: "87".into(),
            speed: "0".into(),
            location: "Depot 4".into(),
        }
    }

    #[test]
    fn converts_valid_form() {
        let v = form().into_vehicle(now()).unwrap();
        assert_eq!(v.vehicle_id, "EV-001");
        assert_eq!(v.battery_status, 87);
        assert_eq!(v.speed, 0);
        assert_eq!(v.location, "Depot 4");
        assert_eq!(v.last_updated, "2024-03-15 09:30:05");
    }

    #[test]
    fn blank_location_is_unknown() {
        let mut f = form();
        f.location = "   ".into();
        assert_eq!(f.into_vehicle(now()).unwrap().location, UNKNOWN_LOCATION);
    }

    #[test]
    fn non_numeric_battery_is_rejected() {
        let mut f = form();
        f.battery_status = "full".into();
        assert_eq!(
            f.into_vehicle(now()).unwrap_err(),
            FleetError::InvalidNumber {
                field: "Battery status"
            }
        );
    }

    #[test]
    fn fractional_speed_is_rejected() {
        let mut f = form();
        f.speed = "42.5".into();
        assert!(f.into_vehicle(now()).is_err());
    }

    #[test]
    fn blank_vehicle_id_is_rejected() {
        let mut f = form();
        f.vehicle_id = " ".into();
        assert_eq!(
            f.into_vehicle(now()).unwrap_err(),
            FleetError::MissingField("Vehicle ID")
        );
    }
}
