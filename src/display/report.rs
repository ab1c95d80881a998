//! Report formatting for terminal output
//!
//! Renders a [`Report`] as a KPI block, the budget table, an expense
//! breakdown with bars, and the monthly trend.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::reports::{CategorySummary, MonthlyBucket, Report};

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BudgetRow {
    fn new(summary: &CategorySummary, symbol: &str) -> Self {
        Self {
            category: summary.category.to_string(),
            budget: summary.budget.format_with_symbol(symbol),
            spent: summary.spent.format_with_symbol(symbol),
            remaining: summary.remaining.format_with_symbol(symbol),
            status: summary.status.to_string(),
        }
    }
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

impl MonthRow {
    fn new(bucket: &MonthlyBucket, symbol: &str) -> Self {
        Self {
            month: bucket.month.to_string(),
            income: bucket.total_income.format_with_symbol(symbol),
            expense: bucket.total_expense.format_with_symbol(symbol),
            net: bucket.net().format_with_symbol(symbol),
        }
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn section(output: &mut String, title: &str) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&"─".repeat(WIDTH));
    output.push('\n');
}

/// The budget table on its own
pub fn format_budget_table(report: &Report, symbol: &str) -> String {
    let rows: Vec<BudgetRow> = report
        .category_summaries
        .iter()
        .map(|s| BudgetRow::new(s, symbol))
        .collect();
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..4), Alignment::right());
    table.to_string()
}

/// The monthly trend table on its own
pub fn format_monthly_table(report: &Report, symbol: &str) -> String {
    let rows: Vec<MonthRow> = report
        .monthly_series
        .iter()
        .map(|b| MonthRow::new(b, symbol))
        .collect();
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Bars of each category's share of spending, with the average budget
pub fn format_expense_breakdown(report: &Report, symbol: &str) -> String {
    let breakdown = report.expense_breakdown();
    if breakdown.is_empty() {
        return "No categorised spending.\n".to_string();
    }

    let max = breakdown
        .iter()
        .map(|s| s.spent.as_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for share in &breakdown {
        output.push_str(&format!(
            "{:<14} {} {:>14} {:>6}\n",
            share.category.name(),
            format_bar(share.spent.as_f64(), max, BAR_WIDTH),
            share.spent.format_with_symbol(symbol),
            format_percentage(share.percentage)
        ));
    }
    output.push_str(&format!(
        "Average budget: {}\n",
        report.average_budget().format_with_symbol(symbol)
    ));
    output
}

fn kpi(label: &str, amount: Money, symbol: &str) -> String {
    format!("{:<16}{:>20}\n", label, amount.format_with_symbol(symbol))
}

/// Format the full report for terminal display
pub fn format_report(report: &Report, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Financial Budget Report\n");
    output.push_str(&"═".repeat(WIDTH));
    output.push('\n');
    output.push_str(&kpi("Total Income", report.total_income, symbol));
    output.push_str(&kpi("Total Expenses", report.total_expense, symbol));
    output.push_str(&kpi("Net Savings", report.net_savings, symbol));
    output.push_str(&format!("{:<16}{:>20}\n", "Transactions", report.transaction_count));

    section(&mut output, "Expenses by Category");
    output.push_str(&format_budget_table(report, symbol));
    output.push('\n');

    let over = report.over_budget_count();
    if over > 0 {
        output.push_str(&format!("{} categor{} over budget\n", over, if over == 1 { "y" } else { "ies" }));
    }
    if report.unmatched_count > 0 {
        output.push_str(&format!(
            "{} expense(s) totalling {} had unrecognised categories and are not shown above\n",
            report.unmatched_count,
            report.unmatched_expense.format_with_symbol(symbol)
        ));
    }

    section(&mut output, "Expense Breakdown");
    output.push_str(&format_expense_breakdown(report, symbol));

    section(&mut output, "Monthly Trends");
    if report.monthly_series.is_empty() {
        output.push_str("No transactions.\n");
    } else {
        output.push_str(&format_monthly_table(report, symbol));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetConfig, Category, RawRecord, RecordPolicy};
    use crate::reports::AnalyticsEngine;

    fn sample_report() -> Report {
        let budgets = BudgetConfig::uniform(&Category::defaults(), Money::from_units(1000))
            .unwrap()
            .with(Category::Food, Money::from_units(100))
            .unwrap();
        AnalyticsEngine::report_from_records(
            vec![
                RawRecord::new("2025-01-10", "Food", "150", "Expense"),
                RawRecord::new("2025-01-11", "Housing", "1200", "Expense"),
                RawRecord::new("2025-02-01", "Other", "3000", "Income"),
                RawRecord::new("2025-02-02", "Crypto", "40", "Expense"),
            ],
            &RecordPolicy::default(),
            &budgets,
        )
        .unwrap()
    }

    #[test]
    fn test_format_report_sections() {
        let output = format_report(&sample_report(), "$");

        assert!(output.contains("Financial Budget Report"));
        assert!(output.contains("Total Income"));
        assert!(output.contains("$3,000.00"));
        assert!(output.contains("Net Savings"));
        assert!(output.contains("$1,610.00"));
        assert!(output.contains("Over Budget"));
        assert!(output.contains("Within Budget"));
        assert!(output.contains("2 categories over budget"));
        assert!(output.contains("had unrecognised categories"));
        assert!(output.contains("2025-01"));
        assert!(output.contains("2025-02"));
    }

    #[test]
    fn test_budget_table_has_every_category() {
        let table = format_budget_table(&sample_report(), "$");
        for category in Category::ALL {
            assert!(table.contains(category.name()));
        }
        assert!(table.contains("-$50.00"));
    }

    #[test]
    fn test_breakdown() {
        let output = format_expense_breakdown(&sample_report(), "$");
        assert!(output.contains("Housing"));
        assert!(output.contains("Average budget: $871.42"));
        assert!(!output.contains("Transport"));
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
        assert_eq!(format_bar(20.0, 10.0, 2), "██");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.55), "5.5%");
        assert_eq!(format_percentage(55.5), "56%");
    }
}
