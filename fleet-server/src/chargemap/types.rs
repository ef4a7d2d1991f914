//! Open Charge Map POI types.
//!
//! Open Charge Map returns a bare JSON array of points of interest. In
//! compact mode each record carries an `AddressInfo` block and a list of
//! `Connections`; every field we read is optional upstream.

use serde::Deserialize;

use crate::geo::Coordinate;

use super::error::DirectoryError;

/// Name used when a record carries no title.
pub const UNKNOWN_STATION: &str = "Unknown Station";

/// A charging location as returned by the directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationRecord {
    #[serde(default)]
    pub address_info: Option<AddressInfo>,

    #[serde(default)]
    pub connections: Option<Vec<Connection>>,
}

/// Address block of a station record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressInfo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A single plug/outlet at a station.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Connection {
    #[serde(rename = "PowerKW", default)]
    pub power_kw: Option<f64>,
}

impl StationRecord {
    /// Display name, falling back to [`UNKNOWN_STATION`].
    pub fn title(&self) -> &str {
        self.address_info
            .as_ref()
            .and_then(|a| a.title.as_deref())
            .unwrap_or(UNKNOWN_STATION)
    }

    /// Position of the station, if it has a usable one.
    ///
    /// A latitude or longitude of exactly zero counts as missing, so
    /// stations on the equator or prime meridian are never returned.
    pub fn position(&self) -> Option<Coordinate> {
        let info = self.address_info.as_ref()?;
        let lat = info.latitude.filter(|v| *v != 0.0)?;
        let lng = info.longitude.filter(|v| *v != 0.0)?;
        Some(Coordinate::new(lat, lng))
    }

    /// Power rating of the first listed connector.
    ///
    /// A station listing no connectors rates 0 kW. A first connector
    /// without a rating gives `None` and the station is not a candidate.
    pub fn first_connector_power_kw(&self) -> Option<f64> {
        match self.connections.as_deref().and_then(|c| c.first()) {
            Some(connection) => connection.power_kw,
            None => Some(0.0),
        }
    }
}

/// Parse a directory response body.
pub fn parse_stations(body: &str) -> Result<Vec<StationRecord>, DirectoryError> {
    serde_json::from_str(body).map_err(|e| DirectoryError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "ID": 1,
            "AddressInfo": {"Title": "Leeds Dock", "Latitude": 53.792, "Longitude": -1.532},
            "Connections": [{"PowerKW": 50.0, "ConnectionTypeID": 33}, {"PowerKW": 7.0}]
        },
        {
            "AddressInfo": {"Latitude": 53.8, "Longitude": -1.55},
            "Connections": []
        },
        {
            "AddressInfo": {"Title": "Null Island", "Latitude": 0.0, "Longitude": 12.0}
        },
        {
            "Connections": [{"PowerKW": 22.0}]
        }
    ]"#;

    #[test]
    fn parses_compact_records() {
        let stations = parse_stations(SAMPLE).unwrap();
        assert_eq!(stations.len(), 4);

        assert_eq!(stations[0].title(), "Leeds Dock");
        assert_eq!(
            stations[0].position(),
            Some(Coordinate::new(53.792, -1.532))
        );
        assert_eq!(stations[0].first_connector_power_kw(), Some(50.0));
    }

    #[test]
    fn missing_title_and_connectors_use_defaults() {
        let stations = parse_stations(SAMPLE).unwrap();
        assert_eq!(stations[1].title(), UNKNOWN_STATION);
        assert_eq!(stations[1].first_connector_power_kw(), Some(0.0));
        assert_eq!(stations[2].first_connector_power_kw(), Some(0.0));
    }

    #[test]
    fn zero_latitude_counts_as_missing() {
        let stations = parse_stations(SAMPLE).unwrap();
        assert_eq!(stations[2].position(), None);
    }

    #[test]
    fn missing_address_has_no_position() {
        let stations = parse_stations(SAMPLE).unwrap();
        assert_eq!(stations[3].position(), None);
        assert_eq!(stations[3].title(), UNKNOWN_STATION);
    }

    #[test]
    fn unrated_first_connector_has_no_power() {
        let station: StationRecord =
            serde_json::from_str(r#"{"Connections": [{"PowerKW": null}, {"PowerKW": 22.0}]}"#)
                .unwrap();
        assert_eq!(station.first_connector_power_kw(), None);

        let station: StationRecord =
            serde_json::from_str(r#"{"Connections": [{"ConnectionTypeID": 25}]}"#).unwrap();
        assert_eq!(station.first_connector_power_kw(), None);
    }

    #[test]
    fn non_array_body_is_json_error() {
        let err = parse_stations(r#"{"error": "bad key"}"#).unwrap_err();
        assert!(matches!(err, DirectoryError::Json { .. }));
    }
}
