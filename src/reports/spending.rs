//! Spending by category
//!
//! Sums expense transactions per configured category. Every configured
//! category gets a row, in configured order, even when nothing was spent.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Category, Money, TransactionSet};

/// Expense total for a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpendingByCategory {
    /// The category
    pub category: Category,
    /// Total of expense transactions (never negative)
    pub spent: Money,
    /// Number of expense transactions
    pub transaction_count: usize,
}

/// Spending for every configured category, in configured order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySpending {
    rows: Vec<SpendingByCategory>,
}

impl CategorySpending {
    /// Aggregate expense spending over `transactions` for `categories`
    ///
    /// Transactions without a resolved category, or whose category is not in
    /// `categories`, are ignored. A category listed twice appears once, at its
    /// first position.
    pub fn aggregate(transactions: &TransactionSet, categories: &[Category]) -> Self {
        let mut totals: HashMap<Category, (Money, usize)> = HashMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            if let Some(category) = txn.category {
                let entry = totals.entry(category).or_insert((Money::zero(), 0));
                entry.0 += txn.amount;
                entry.1 += 1;
            }
        }

        let mut rows: Vec<SpendingByCategory> = Vec::with_capacity(categories.len());
        for &category in categories {
            if rows.iter().any(|r| r.category == category) {
                continue;
            }
            let (spent, transaction_count) = totals.get(&category).copied().unwrap_or_default();
            rows.push(SpendingByCategory {
                category,
                spent,
                transaction_count,
            });
        }

        Self { rows }
    }

    /// Rows in configured order
    pub fn rows(&self) -> &[SpendingByCategory] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpendingByCategory> {
        self.rows.iter()
    }

    /// Spending for one category, zero when it is not configured
    pub fn spent(&self, category: Category) -> Money {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.spent)
            .unwrap_or_default()
    }

    /// Total spending across all configured categories
    pub fn total(&self) -> Money {
        self.rows.iter().map(|r| r.spent).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
