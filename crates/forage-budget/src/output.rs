//! Budget report: a serializable snapshot of every computed figure.
//!
//! The report is what a presentation layer consumes. It can be written as
//! pretty JSON or rendered as a plain-text summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::demand::Totals;
use crate::paddock::PaddockState;
use crate::projection::ChartSeries;
use crate::registry::{CattleGroup, GoatGroup, SheepGroup};

/// Snapshot of the budget at one point in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub paddock: PaddockState,
    #[serde(default)]
    pub cattle: Vec<CattleGroup>,
    #[serde(default)]
    pub sheep: Vec<SheepGroup>,
    #[serde(default)]
    pub goats: Vec<GoatGroup>,
    pub totals: Totals,
    /// kg
    pub total_standing_forage: f64,
    /// kg
    pub total_residual_forage: f64,
    /// kg above the residual, never negative
    pub available_forage: f64,
    /// kg DM per day
    pub daily_demand: f64,
    pub grazing_days: f64,
    #[serde(default)]
    pub chart: ChartSeries,
}

impl BudgetReport {
    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, OutputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns true if the herd has no demand to budget.
    pub fn has_demand(&self) -> bool {
        self.daily_demand > 0.0
    }
}

/// Formats a number with two decimals and thousands separators.
pub fn format_number(value: f64) -> String {
    format_with_decimals(value, 2)
}

/// Formats a number with the given decimals and thousands separators.
pub fn format_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

impl fmt::Display for BudgetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Paddock")?;
        writeln!(
            f,
            "  Total standing dry matter: {} kg",
            format_number(self.total_standing_forage)
        )?;
        writeln!(
            f,
            "  Total desired residual:    {} kg",
            format_number(self.total_residual_forage)
        )?;
        writeln!(f, "  Productivity level:        {}", self.paddock.productivity_level)?;

        if !self.cattle.is_empty() {
            writeln!(f)?;
            writeln!(f, "Cattle")?;
            for group in &self.cattle {
                writeln!(
                    f,
                    "  [{}] {} - {} x {} ({}) at {} AE = {} AE",
                    group.id,
                    group.type_label,
                    group.number,
                    group.category,
                    group.productivity,
                    format_number(group.demand_rating),
                    format_number(group.total_demand)
                )?;
            }
        }

        if !self.sheep.is_empty() {
            writeln!(f)?;
            writeln!(f, "Sheep")?;
            for group in &self.sheep {
                writeln!(
                    f,
                    "  [{}] {} - {} x {} at {} DSE = {} DSE",
                    group.id,
                    group.type_label,
                    group.number,
                    group.sheep_class,
                    format_number(group.demand_rating),
                    format_number(group.total_demand)
                )?;
            }
        }

        if !self.goats.is_empty() {
            writeln!(f)?;
            writeln!(f, "Goats")?;
            for group in &self.goats {
                writeln!(
                    f,
                    "  [{}] {} - {} x {} @ {} kg at {} DSE = {} DSE",
                    group.id,
                    group.type_label,
                    group.number,
                    group.goat_class,
                    format_number(group.weight_kg),
                    format_number(group.demand_rating),
                    format_number(group.total_demand)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Herd summary")?;
        writeln!(f, "  Total AE:  {}", format_number(self.totals.total_ae))?;
        writeln!(f, "  Total DSE: {}", format_number(self.totals.total_dse))?;
        writeln!(f, "    Sheep DSE: {}", format_number(self.totals.sheep_dse))?;
        writeln!(f, "    Goat DSE:  {}", format_number(self.totals.goat_dse))?;

        writeln!(f)?;
        writeln!(f, "Grazing budget")?;
        writeln!(
            f,
            "  Total daily demand:     {} kg/day",
            format_number(self.daily_demand)
        )?;
        writeln!(
            f,
            "  Available dry matter:   {} kg",
            format_number(self.available_forage)
        )?;
        write!(
            f,
            "  Estimated grazing days: {}",
            format_with_decimals(self.grazing_days, 1)
        )
    }
}

/// Errors that can occur while writing or reading reports.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes a report as pretty JSON, creating parent directories as needed.
pub fn write_report(path: &Path, report: &BudgetReport) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;

    tracing::info!("Wrote budget report to {:?}", path);
    Ok(())
}

/// Reads a report previously written with [`write_report`].
pub fn read_report(path: &Path) -> Result<BudgetReport, OutputError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(278.4), "278.40");
        assert_eq!(format_number(40_000.0), "40,000.00");
        assert_eq!(format_number(1_234_567.891), "1,234,567.89");
        assert_eq!(format_number(-1_500.0), "-1,500.00");
    }

    #[test]
    fn test_format_with_decimals() {
        assert_eq!(format_with_decimals(143.678, 1), "143.7");
        assert_eq!(format_with_decimals(999.96, 1), "1,000.0");
        assert_eq!(format_with_decimals(12.0, 0), "12");
        assert_eq!(format_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = crate::fixtures::sample_budget().report();

        let json = report.to_json().unwrap();
        assert!(json.contains("\"goat_class\": \"Buck\""));

        let parsed = BudgetReport::from_json(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_report_without_herd_has_no_demand() {
        let empty = crate::ForageBudget::with_defaults().report();
        assert!(!empty.has_demand());
        assert!(empty.chart.is_empty());

        assert!(crate::fixtures::reference_budget().report().has_demand());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = BudgetReport::from_json("{ not json").unwrap_err();
        assert!(matches!(err, OutputError::Json(_)));
    }

    #[test]
    fn test_output_error_display() {
        let err: OutputError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
