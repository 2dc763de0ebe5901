//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with storage, the reports and the export layer.

pub mod report;
pub mod transaction;

pub use report::{handle_breakdown_command, handle_budgets_command, BreakdownArgs, BudgetsArgs};
pub use transaction::{handle_transactions_command, TransactionsArgs};

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};
use crate::export::{export, ExportFormat, Exportable};

/// Parse a `YYYY-MM-DD` argument
pub fn parse_date(value: &str, what: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        FintrackError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            what, value
        ))
    })
}

/// Parse an optional `YYYY-MM-DD` argument
pub fn parse_optional_date(value: Option<&str>, what: &str) -> FintrackResult<Option<NaiveDate>> {
    value.map(|v| parse_date(v, what)).transpose()
}

/// Quick date windows offered next to explicit dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuickRange {
    /// Just today
    Today,
    /// The last seven days and today
    Week,
    /// The last thirty days and today
    Month,
}

/// `--output` / `--format` flags shared by commands that can export
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write to this file instead of printing a table
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format: csv, json or yaml (defaults to the file extension, then csv)
    #[arg(short, long)]
    pub format: Option<String>,
}

impl OutputArgs {
    /// The export format requested, if any
    pub fn resolve_format(&self) -> FintrackResult<Option<ExportFormat>> {
        if let Some(format) = &self.format {
            return format.parse().map(Some);
        }
        Ok(self.output.as_ref().map(|path| {
            ExportFormat::from_path(path).unwrap_or(ExportFormat::Csv)
        }))
    }

    /// Whether the caller should print the terminal rendition
    pub fn is_terminal(&self) -> bool {
        self.output.is_none() && self.format.is_none()
    }
}

/// Export `item` to the file or stdout selected by `args`
pub fn write_export<T: Exportable>(item: &T, args: &OutputArgs, label: &str) -> FintrackResult<()> {
    let format = args.resolve_format()?.unwrap_or(ExportFormat::Csv);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FintrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export(item, format, &mut writer)?;
            writer.flush()?;
            println!("{} exported to: {}", label, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export(item, format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-07-28", "start").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 28).unwrap()
        );

        let err = parse_date("07/28/2025", "start").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid start date format"));

        assert_eq!(parse_optional_date(None, "end").unwrap(), None);
    }

    #[test]
    fn test_resolve_format() {
        let args = OutputArgs::default();
        assert_eq!(args.resolve_format().unwrap(), None);
        assert!(args.is_terminal());

        let args = OutputArgs {
            output: Some(PathBuf::from("report.yaml")),
            format: None,
        };
        assert_eq!(args.resolve_format().unwrap(), Some(ExportFormat::Yaml));

        let args = OutputArgs {
            output: Some(PathBuf::from("report.txt")),
            format: None,
        };
        assert_eq!(args.resolve_format().unwrap(), Some(ExportFormat::Csv));

        let args = OutputArgs {
            output: None,
            format: Some("json".into()),
        };
        assert_eq!(args.resolve_format().unwrap(), Some(ExportFormat::Json));
        assert!(!args.is_terminal());

        let args = OutputArgs {
            output: None,
            format: Some("pdf".into()),
        };
        assert!(args.resolve_format().is_err());
    }
}
