//! CSV export of report tables
//!
//! Amounts are written in currency units with two decimals.

use serde::Serialize;
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::Report;

#[derive(Serialize)]
struct CategoryCsvRow<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Budget")]
    budget: String,
    #[serde(rename = "Spent")]
    spent: String,
    #[serde(rename = "Remaining")]
    remaining: String,
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Serialize)]
struct MonthlyCsvRow {
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Income")]
    income: String,
    #[serde(rename = "Expense")]
    expense: String,
}

fn csv_err(e: csv::Error) -> TrackerError {
    TrackerError::Export(e.to_string())
}

/// Export the category summary table
pub fn export_category_summary_csv<W: Write>(report: &Report, writer: W) -> TrackerResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for summary in &report.category_summaries {
        writer
            .serialize(CategoryCsvRow {
                category: summary.category.name(),
                budget: summary.budget.to_string(),
                spent: summary.spent.to_string(),
                remaining: summary.remaining.to_string(),
                status: summary.status.to_string(),
            })
            .map_err(csv_err)?;
    }
    writer.flush()?;
    Ok(())
}

/// Export the monthly series table
pub fn export_monthly_csv<W: Write>(report: &Report, writer: W) -> TrackerResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if report.monthly_series.is_empty() {
        writer
            .write_record(["Month", "Income", "Expense"])
            .map_err(csv_err)?;
    }
    for bucket in &report.monthly_series {
        writer
            .serialize(MonthlyCsvRow {
                month: bucket.month.to_string(),
                income: bucket.total_income.to_string(),
                expense: bucket.total_expense.to_string(),
            })
            .map_err(csv_err)?;
    }
    writer.flush()?;
    Ok(())
}

/// Export both tables, separated by a blank line
pub fn export_report_csv<W: Write>(report: &Report, writer: &mut W) -> TrackerResult<()> {
    export_category_summary_csv(report, &mut *writer)?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    export_monthly_csv(report, &mut *writer)
}
