//! Energy consumption dashboard data.
//!
//! Reads the operational-cost CSV export (`Datetime`, `COMED_MW`,
//! `Operational_Costs`) and shapes it into a time series for the line
//! chart and a per-month total for the pie chart.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Output format for chart labels.
const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted timestamp layouts in the `Datetime` column.
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Errors loading the energy dataset.
#[derive(Debug, thiserror::Error)]
pub enum EnergyError {
    /// File could not be opened or read
    #[error("failed to read energy dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Row did not match the expected columns
    #[error("malformed energy dataset: {0}")]
    Csv(#[from] csv::Error),

    /// `Datetime` value in an unknown layout
    #[error("unrecognised timestamp {value:?}")]
    InvalidDatetime { value: String },
}

#[derive(Debug, Deserialize)]
struct EnergyRow {
    #[serde(rename = "Datetime")]
    datetime: String,
    #[serde(rename = "COMED_MW")]
    consumption_mw: f64,
    #[serde(rename = "Operational_Costs")]
    operational_cost: f64,
}

/// One hourly sample.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyRecord {
    pub datetime: NaiveDateTime,
    pub consumption_mw: f64,
    pub operational_cost: f64,
}

/// Series for the consumption/cost line chart, in time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineChartData {
    pub dates: Vec<String>,
    pub consumption: Vec<f64>,
    pub cost: Vec<f64>,
}

/// Total consumption per calendar month name, alphabetical by month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Everything the energy page plots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnergyDashboard {
    pub line: LineChartData,
    pub pie: PieChartData,
}

/// Parse records from CSV text.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<EnergyRecord>, EnergyError> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for row in csv.deserialize::<EnergyRow>() {
        let row = row?;
        records.push(EnergyRecord {
            datetime: parse_datetime(&row.datetime)?,
            consumption_mw: row.consumption_mw,
            operational_cost: row.operational_cost,
        });
    }

    Ok(records)
}

/// Load records from a CSV file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<EnergyRecord>, EnergyError> {
    let file = std::fs::File::open(path)?;
    read_records(file)
}

impl EnergyDashboard {
    /// Build chart series from samples in any order.
    pub fn from_records(mut records: Vec<EnergyRecord>) -> Self {
        records.sort_by_key(|r| r.datetime);

        let line = LineChartData {
            dates: records
                .iter()
                .map(|r| r.datetime.format(LABEL_FORMAT).to_string())
                .collect(),
            consumption: records.iter().map(|r| r.consumption_mw).collect(),
            cost: records.iter().map(|r| r.operational_cost).collect(),
        };

        let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
        for r in &records {
            *monthly.entry(r.datetime.format("%B").to_string()).or_default() += r.consumption_mw;
        }
        let (labels, values) = monthly.into_iter().unzip();

        Self {
            line,
            pie: PieChartData { labels, values },
        }
    }

    /// Load the CSV at `path` and build the dashboard.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnergyError> {
        Ok(Self::from_records(load_records(path)?))
    }
}

fn parse_datetime(value: &str) -> Result<NaiveDateTime, EnergyError> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| EnergyError::InvalidDatetime {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
Datetime,COMED_MW,Operational_Costs
2018-02-01 01:00:00,9000.5,120.0
2018-01-31 23:00:00,10000.0,130.0
2018-01-31 22:00:00,11000.0,140.5
";

    #[test]
    fn reads_rows() {
        let records = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].consumption_mw, 9000.5);
        assert_eq!(records[2].operational_cost, 140.5);
    }

    #[test]
    fn line_series_is_time_ordered() {
        let dashboard = EnergyDashboard::from_records(read_records(SAMPLE.as_bytes()).unwrap());

        assert_eq!(
            dashboard.line.dates,
            vec![
                "2018-01-31 22:00:00",
                "2018-01-31 23:00:00",
                "2018-02-01 01:00:00"
            ]
        );
        assert_eq!(dashboard.line.consumption, vec![11000.0, 10000.0, 9000.5]);
        assert_eq!(dashboard.line.cost, vec![140.5, 130.0, 120.0]);
    }

    #[test]
    fn pie_sums_by_month_name() {
        let dashboard = EnergyDashboard::from_records(read_records(SAMPLE.as_bytes()).unwrap());

        assert_eq!(dashboard.pie.labels, vec!["February", "January"]);
        assert_eq!(dashboard.pie.values, vec![9000.5, 21000.0]);
    }

    #[test]
    fn same_month_different_years_share_a_slice() {
        let csv = "\
Datetime,COMED_MW,Operational_Costs
2017-03-01 00:00:00,1.0,1.0
2018-03-01 00:00:00,2.0,1.0
";
        let dashboard = EnergyDashboard::from_records(read_records(csv.as_bytes()).unwrap());
        assert_eq!(dashboard.pie.labels, vec!["March"]);
        assert_eq!(dashboard.pie.values, vec![3.0]);
    }

    #[test]
    fn iso_t_separator_is_accepted() {
        let csv = "Datetime,COMED_MW,Operational_Costs\n2018-01-01T05:00:00,1.0,2.0\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records[0].datetime.format(LABEL_FORMAT).to_string(),
            "2018-01-01 05:00:00"
        );
    }

    #[test]
    fn bad_timestamp_is_reported() {
        let csv = "Datetime,COMED_MW,Operational_Costs\nyesterday,1.0,2.0\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, EnergyError::InvalidDatetime { ref value } if value == "yesterday"));
    }

    #[test]
    fn non_numeric_value_is_csv_error() {
        let csv = "Datetime,COMED_MW,Operational_Costs\n2018-01-01 05:00:00,lots,2.0\n";
        assert!(matches!(
            read_records(csv.as_bytes()).unwrap_err(),
            EnergyError::Csv(_)
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dashboard = EnergyDashboard::load(file.path()).unwrap();
        assert_eq!(dashboard.line.dates.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EnergyDashboard::load("/nonexistent/operational_Cost.csv").unwrap_err();
        assert!(matches!(err, EnergyError::Io(_)));
    }
}
