//! CLI command for the budget report

use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use super::{load_records, open_output};
use crate::config::Settings;
use crate::display::format_report;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml, ReportExport};
use crate::models::{Month, TransactionSet, UnknownCategoryPolicy, ValidationMode};
use crate::reports::AnalyticsEngine;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// JSON document (amounts in cents)
    Json,
    /// YAML document (amounts in cents)
    Yaml,
    /// Category and monthly tables as CSV
    Csv,
}

/// Arguments for `report`
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// CSV file with Date, Category, Amount and Type columns (sample data if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Only include transactions from this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Override a category budget, e.g. --budget Food=250 (repeatable)
    #[arg(short, long = "budget", value_name = "CATEGORY=AMOUNT")]
    pub budgets: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How to treat categories that are not configured
    #[arg(long, value_enum)]
    pub unknown: Option<UnknownCategoryPolicy>,

    /// Report every invalid row instead of stopping at the first
    #[arg(long)]
    pub collect_errors: bool,
}

/// Handle the report command
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> TrackerResult<()> {
    let mut settings = settings.clone();
    for assignment in &args.budgets {
        settings.apply_budget_override(assignment)?;
    }
    if let Some(policy) = args.unknown {
        settings.unknown_category = policy;
    }
    if args.collect_errors {
        settings.validation = ValidationMode::CollectAll;
    }

    let month = args
        .month
        .as_deref()
        .map(Month::parse)
        .transpose()
        .map_err(|e| TrackerError::Validation(e.to_string()))?;

    let policy = settings.record_policy();
    let budgets = settings.budget_config()?;

    let (records, source) = load_records(args.input.as_deref(), &settings)?;
    let mut transactions = TransactionSet::from_records(records, &policy)?;
    if let Some(month) = month {
        transactions = transactions.for_month(month);
    }

    let report = AnalyticsEngine::compute_report(&transactions, &budgets, &policy.categories);

    let mut writer = open_output(args.output.as_ref())?;
    match args.format {
        OutputFormat::Table => {
            write!(writer, "{}", format_report(&report, &settings.currency_symbol))?;
        }
        OutputFormat::Json => {
            export_report_json(&ReportExport::new(&report, source), &mut writer, true)?;
        }
        OutputFormat::Yaml => {
            export_report_yaml(&ReportExport::new(&report, source), &mut writer)?;
        }
        OutputFormat::Csv => export_report_csv(&report, &mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        tracing::info!(path = %path.display(), "report written");
        println!("Report exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::write_records;
    use crate::models::RawRecord;
    use std::fs::File;
    use tempfile::TempDir;

    fn write_ledger(dir: &TempDir, records: &[RawRecord]) -> PathBuf {
        let path = dir.path().join("ledger.csv");
        write_records(File::create(&path).unwrap(), records).unwrap();
        path
    }

    #[test]
    fn test_report_to_json_file() {
        let dir = TempDir::new().unwrap();
        let input = write_ledger(
            &dir,
            &[
                RawRecord::new("2025-01-10", "Food", "150", "Expense"),
                RawRecord::new("2025-02-10", "Food", "30", "Expense"),
            ],
        );
        let output = dir.path().join("report.json");

        handle_report_command(
            &Settings::default(),
            ReportArgs {
                input: Some(input),
                month: Some("2025-01".into()),
                budgets: vec!["Food=100".into()],
                format: OutputFormat::Json,
                output: Some(output.clone()),
                ..ReportArgs::default()
            },
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["report"]["total_expense"], 15000);
        assert_eq!(value["report"]["category_summaries"][1]["status"], "OverBudget");
    }

    #[test]
    fn test_reject_policy_from_args() {
        let dir = TempDir::new().unwrap();
        let input = write_ledger(&dir, &[RawRecord::new("2025-01-10", "Crypto", "5", "Expense")]);

        let err = handle_report_command(
            &Settings::default(),
            ReportArgs {
                input: Some(input),
                unknown: Some(UnknownCategoryPolicy::Reject),
                output: Some(dir.path().join("out.txt")),
                ..ReportArgs::default()
            },
        )
        .unwrap_err();

        assert!(err.is_record_error());
    }

    #[test]
    fn test_bad_month() {
        let err = handle_report_command(
            &Settings::default(),
            ReportArgs {
                month: Some("Jan".into()),
                ..ReportArgs::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, TrackerError::Validation(_)));
    }
}
