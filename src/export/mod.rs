//! Export module for budget-tracker
//!
//! - CSV: category summary and monthly tables (spreadsheet-compatible)
//! - JSON: the full report, machine-readable
//! - YAML: the full report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_category_summary_csv, export_monthly_csv, export_report_csv};
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
