//! Analytics engine
//!
//! Composes category spending, budget evaluation and the monthly series into a
//! single [`Report`]. The engine keeps no state; the same inputs always give
//! the same report.

use serde::Serialize;

use super::budget_status::{evaluate, CategorySummary};
use super::monthly::{monthly_series, MonthlyBucket};
use super::spending::CategorySpending;
use crate::error::TrackerResult;
use crate::models::{
    BudgetConfig, Category, Money, RawRecord, RecordPolicy, TransactionKind, TransactionSet,
};

/// A category's share of categorised spending
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub category: Category,
    pub spent: Money,
    /// Percentage of the summed category spending (0-100)
    pub percentage: f64,
}

/// The complete output of one analytics computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`, may be negative
    pub net_savings: Money,
    /// One row per configured category, in configured order
    pub category_summaries: Vec<CategorySummary>,
    /// One bucket per month, oldest first
    pub monthly_series: Vec<MonthlyBucket>,
    /// Number of transactions in the batch
    pub transaction_count: usize,
    /// Expense total of transactions left out of the category summaries
    pub unmatched_expense: Money,
    /// Number of expense transactions left out of the category summaries
    pub unmatched_count: usize,
}

impl Report {
    /// Summary row for one category
    pub fn summary(&self, category: Category) -> Option<&CategorySummary> {
        self.category_summaries
            .iter()
            .find(|s| s.category == category)
    }

    /// Get list of overspent categories
    pub fn over_budget(&self) -> Vec<&CategorySummary> {
        self.category_summaries
            .iter()
            .filter(|s| s.is_overspent())
            .collect()
    }

    /// Get count of overspent categories
    pub fn over_budget_count(&self) -> usize {
        self.category_summaries
            .iter()
            .filter(|s| s.is_overspent())
            .count()
    }

    /// Mean budget ceiling across configured categories
    pub fn average_budget(&self) -> Money {
        let count = self.category_summaries.len() as i64;
        if count == 0 {
            return Money::zero();
        }
        let total: Money = self.category_summaries.iter().map(|s| s.budget).sum();
        Money::from_cents(total.cents() / count)
    }

    /// Total spending booked to configured categories
    pub fn categorised_expense(&self) -> Money {
        self.category_summaries.iter().map(|s| s.spent).sum()
    }

    /// Each category's share of categorised spending, in configured order
    ///
    /// Categories with no spending are omitted.
    pub fn expense_breakdown(&self) -> Vec<ExpenseShare> {
        let total = self.categorised_expense();
        self.category_summaries
            .iter()
            .filter(|s| !s.spent.is_zero())
            .map(|s| ExpenseShare {
                category: s.category,
                spent: s.spent,
                percentage: s.spent.percentage_of(total),
            })
            .collect()
    }
}

/// Stateless entry point for report computation
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Compute a report over a validated transaction set
    ///
    /// Never fails: every stage is total over valid input.
    pub fn compute_report(
        transactions: &TransactionSet,
        budgets: &BudgetConfig,
        categories: &[Category],
    ) -> Report {
        let total_income = transactions.total(TransactionKind::Income);
        let total_expense = transactions.total(TransactionKind::Expense);

        let spending = CategorySpending::aggregate(transactions, categories);
        let category_summaries = evaluate(&spending, budgets);
        let monthly_series = monthly_series(transactions);

        let (unmatched_expense, unmatched_count) = transactions
            .iter()
            .filter(|t| t.is_expense())
            .filter(|t| t.category.map_or(true, |c| !categories.contains(&c)))
            .fold((Money::zero(), 0), |(sum, count), t| (sum + t.amount, count + 1));

        tracing::debug!(
            transactions = transactions.len(),
            categories = category_summaries.len(),
            months = monthly_series.len(),
            unmatched = unmatched_count,
            "computed report"
        );

        Report {
            total_income,
            total_expense,
            net_savings: total_income - total_expense,
            category_summaries,
            monthly_series,
            transaction_count: transactions.len(),
            unmatched_expense,
            unmatched_count,
        }
    }

    /// Validate raw records and compute a report over them
    ///
    /// Only record validation can fail.
    pub fn report_from_records<I>(
        records: I,
        policy: &RecordPolicy,
        budgets: &BudgetConfig,
    ) -> TrackerResult<Report>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let transactions = TransactionSet::from_records(records, policy)?;
        Ok(Self::compute_report(
            &transactions,
            budgets,
            &policy.categories,
        ))
    }
}
