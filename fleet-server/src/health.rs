//! Battery health heuristic.
//!
//! A rough score from three pack readings: capacity relative to a 1000 mAh
//! reference, voltage relative to a 4.2 V full cell, minus a temperature
//! penalty of 0.01 per degree Celsius.

use std::fmt;

use serde::Serialize;

/// Reference capacity for a healthy cell, in mAh.
const REFERENCE_CAPACITY_MAH: f64 = 1000.0;

/// Full-charge cell voltage.
const FULL_CELL_VOLTAGE: f64 = 4.2;

/// Scores above this are [`HealthStatus::Good`].
const GOOD_THRESHOLD: f64 = 0.8;

/// Scores above this (and not good) are [`HealthStatus::Moderate`].
const MODERATE_THRESHOLD: f64 = 0.5;

/// A reading field that did not parse as a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input. Please enter numeric values.")]
pub struct HealthInputError {
    pub field: &'static str,
}

/// Raw battery measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub capacity_mah: f64,
    pub voltage: f64,
    pub temperature_c: f64,
}

/// Coarse health bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Good,
    Moderate,
    Poor,
}

/// Score and bucket for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthAssessment {
    pub score: f64,
    pub status: HealthStatus,
}

impl BatteryReading {
    /// Parse the three form fields.
    pub fn parse(
        capacity: &str,
        voltage: &str,
        temperature: &str,
    ) -> Result<Self, HealthInputError> {
        Ok(Self {
            capacity_mah: parse_field(capacity, "capacity")?,
            voltage: parse_field(voltage, "voltage")?,
            temperature_c: parse_field(temperature, "temperature")?,
        })
    }

    /// Heuristic health score. Higher is healthier; there is no fixed upper bound.
    pub fn score(&self) -> f64 {
        (self.capacity_mah / REFERENCE_CAPACITY_MAH) * (self.voltage / FULL_CELL_VOLTAGE)
            - (self.temperature_c / 100.0)
    }

    /// Score this reading and bucket it.
    pub fn assess(&self) -> HealthAssessment {
        let score = self.score();
        HealthAssessment {
            score,
            status: HealthStatus::from_score(score),
        }
    }
}

impl HealthStatus {
    /// Bucket a score. Both thresholds are exclusive.
    pub fn from_score(score: f64) -> Self {
        if score > GOOD_THRESHOLD {
            HealthStatus::Good
        } else if score > MODERATE_THRESHOLD {
            HealthStatus::Moderate
        } else {
            HealthStatus::Poor
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthStatus::Good => "Good",
            HealthStatus::Moderate => "Moderate",
            HealthStatus::Poor => "Poor",
        };
        f.write_str(s)
    }
}

fn parse_field(raw: &str, field: &'static str) -> Result<f64, HealthInputError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| HealthInputError { field })
}
