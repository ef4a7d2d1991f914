//! On-demand fleet report.
//!
//! The report is a fixed snapshot of headline metrics plus one sample
//! chart, served as JSON. The requested format is echoed back so a client
//! can lay the content out as a PDF or slide deck.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Title shown on every report.
pub const REPORT_TITLE: &str = "Real-Time Report";

/// Requested export format was not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid report type")]
pub struct InvalidReportType {
    pub requested: String,
}

/// Export formats a client may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Ppt,
}

impl FromStr for ReportFormat {
    type Err = InvalidReportType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ReportFormat::Pdf),
            "ppt" => Ok(ReportFormat::Ppt),
            other => Err(InvalidReportType {
                requested: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Pdf => f.write_str("pdf"),
            ReportFormat::Ppt => f.write_str("ppt"),
        }
    }
}

/// A labelled headline figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub label: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Report content ready for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub format: ReportFormat,
    pub metrics: Vec<Metric>,
    pub charts: Vec<ChartSeries>,
}

/// Headline metrics, in display order.
fn snapshot_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Weather",
            value: "Sunny, 25°C",
        },
        Metric {
            label: "Battery Health",
            value: "85%",
        },
        Metric {
            label: "Driver Analysis",
            value: "Average Speed: 60 km/h",
        },
        Metric {
            label: "Energy Consumption",
            value: "50 kWh",
        },
        Metric {
            label: "Operational Cost",
            value: "$25",
        },
    ]
}

fn sample_chart() -> ChartSeries {
    ChartSeries {
        title: "Sample Chart",
        label: "Sample Data",
        x: vec![1.0, 2.0, 3.0, 4.0],
        y: vec![10.0, 20.0, 25.0, 30.0],
    }
}

/// Assemble the real-time report for `format`.
pub fn real_time_report(format: ReportFormat) -> Report {
    Report {
        title: REPORT_TITLE,
        format,
        metrics: snapshot_metrics(),
        charts: vec![sample_chart()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("pdf".parse::<ReportFormat>().unwrap(), ReportFormat::Pdf);
        assert_eq!("ppt".parse::<ReportFormat>().unwrap(), ReportFormat::Ppt);
    }

    #[test]
    fn rejects_unknown_formats() {
        let err = "docx".parse::<ReportFormat>().unwrap_err();
        assert_eq!(err.requested, "docx");
        assert_eq!(err.to_string(), "Invalid report type");

        // Matching is exact
        assert!("PDF".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn report_has_fixed_content() {
        let report = real_time_report(ReportFormat::Ppt);

        assert_eq!(report.title, "Real-Time Report");
        assert_eq!(report.format, ReportFormat::Ppt);
        let labels: Vec<&str> = report.metrics.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Weather",
                "Battery Health",
                "Driver Analysis",
                "Energy Consumption",
                "Operational Cost"
            ]
        );
        assert_eq!(report.charts.len(), 1);
        assert_eq!(report.charts[0].y, vec![10.0, 20.0, 25.0, 30.0]);
    }

    #[test]
    fn serializes_format_lowercase() {
        let json = serde_json::to_value(real_time_report(ReportFormat::Pdf)).unwrap();
        assert_eq!(json["format"], "pdf");
        assert_eq!(json["metrics"][1]["value"], "85%");
    }
}
