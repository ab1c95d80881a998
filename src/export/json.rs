//! JSON export of a report
//!
//! Amounts are written as integer cents.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::{ExpenseShare, Report};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A report wrapped with export metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Where the transactions came from (a file path or "sample")
    pub source: String,

    /// The report itself
    pub report: &'a Report,

    /// Share of categorised spending per category
    pub expense_breakdown: Vec<ExpenseShare>,
}

impl<'a> ReportExport<'a> {
    /// Wrap a report for export
    pub fn new(report: &'a Report, source: impl Into<String>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            source: source.into(),
            report,
            expense_breakdown: report.expense_breakdown(),
        }
    }
}

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    export: &ReportExport<'_>,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
