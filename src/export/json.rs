//! JSON export with a versioned envelope

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::FintrackResult;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Wrapper written around every JSON and YAML export
#[derive(Debug, Clone, Serialize)]
pub struct ExportEnvelope<'a, T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,
    /// Export timestamp
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: &'static str,
    /// What the payload is ("category_breakdown", "budget_overview", ...)
    pub kind: &'static str,
    pub data: &'a T,
}

impl<'a, T: Serialize> ExportEnvelope<'a, T> {
    pub fn new(kind: &'static str, data: &'a T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            kind,
            data,
        }
    }
}

/// Write `data` as pretty JSON inside an [`ExportEnvelope`]
pub fn export_json<T: Serialize, W: Write>(
    data: &T,
    kind: &'static str,
    writer: &mut W,
) -> FintrackResult<()> {
    let envelope = ExportEnvelope::new(kind, data);
    serde_json::to_writer_pretty(&mut *writer, &envelope)?;
    writeln!(writer)?;
    Ok(())
}
