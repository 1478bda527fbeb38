#![warn(missing_docs)]
//! Racebench Report - Rendering
//!
//! Generates the output formats:
//! - Human (column-aligned terminal grid)
//! - JSON (machine-readable)
//! - CSV (spreadsheet-compatible)
//!
//! Rendering is pure formatting over an assembled [`Report`]; nothing here
//! recomputes or mutates the aggregated numbers.

mod csv;
mod human;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use human::render_human;
pub use json::generate_json_report;
pub use report::{OperationRow, Report, ReportMeta, SCHEMA_VERSION, build_report};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Human,
    /// JSON with full schema.
    Json,
    /// CSV for spreadsheets.
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
