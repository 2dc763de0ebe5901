//! Export module for fintrack
//!
//! Reports and transaction listings can be written as:
//! - CSV: one row per category or transaction (spreadsheet-compatible)
//! - JSON: the full report wrapped in a versioned envelope
//! - YAML: the same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

pub use self::csv::{export_transactions_csv, TransactionListing};
pub use json::{export_json, ExportEnvelope, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use crate::error::{FintrackError, FintrackResult};
use crate::reports::{BudgetOverviewReport, CategoryBreakdownReport};

/// Output format for `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(FintrackError::Validation(format!(
                "Unknown export format '{}'. Use csv, json or yaml",
                other
            ))),
        }
    }
}

/// Something that can be written in every [`ExportFormat`]
pub trait Exportable: Serialize {
    /// Label stored in the JSON/YAML envelope
    fn kind(&self) -> &'static str;

    /// Write the CSV rendition
    fn write_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()>;
}

impl Exportable for CategoryBreakdownReport {
    fn kind(&self) -> &'static str {
        "category_breakdown"
    }

    fn write_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        self.export_csv(writer)
    }
}

impl Exportable for BudgetOverviewReport {
    fn kind(&self) -> &'static str {
        "budget_overview"
    }

    fn write_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        self.export_csv(writer)
    }
}

/// Write `item` to `writer` in the chosen format
pub fn export<T: Exportable, W: Write>(
    item: &T,
    format: ExportFormat,
    writer: &mut W,
) -> FintrackResult<()> {
    tracing::debug!(kind = item.kind(), %format, "exporting");
    match format {
        ExportFormat::Csv => item.write_csv(writer),
        ExportFormat::Json => export_json(item, item.kind(), writer),
        ExportFormat::Yaml => export_yaml(item, item.kind(), writer),
    }
}
