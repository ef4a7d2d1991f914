//! Battery charge level and the range it buys.

use std::fmt;

/// Charge assumed when the caller supplies none, in percent.
pub const DEFAULT_BATTERY_PERCENT: f64 = 50.0;

/// Error returned when a battery level is not a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid battery level: {raw:?}")]
pub struct InvalidBatteryLevel {
    raw: String,
}

/// State of charge, in percent.
///
/// Nominally 0-100 but only numeric parseability is checked, so 120 or
/// -5 pass through and produce a correspondingly odd search radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryLevel(f64);

impl BatteryLevel {
    /// Wrap a percentage.
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// Parse a form or query value. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, InvalidBatteryLevel> {
        raw.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| InvalidBatteryLevel {
                raw: raw.to_string(),
            })
    }

    /// The percentage value.
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Search radius for this charge given the full-charge range.
    pub fn search_radius_km(&self, full_charge_range_km: f64) -> f64 {
        (self.0 / 100.0) * full_charge_range_km
    }
}

impl Default for BatteryLevel {
    fn default() -> Self {
        Self(DEFAULT_BATTERY_PERCENT)
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
