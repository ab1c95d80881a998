//! Budget status evaluation
//!
//! Joins category spending against the budget configuration.

use serde::Serialize;
use std::fmt;

use super::spending::CategorySpending;
use crate::models::{BudgetConfig, Category, Money};

/// Whether a category stayed within its ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BudgetStatus {
    WithinBudget,
    OverBudget,
}

impl BudgetStatus {
    /// Classify a remaining balance; zero is within budget
    pub fn from_remaining(remaining: Money) -> Self {
        if remaining.is_negative() {
            Self::OverBudget
        } else {
            Self::WithinBudget
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Self::OverBudget)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithinBudget => write!(f, "Within Budget"),
            Self::OverBudget => write!(f, "Over Budget"),
        }
    }
}

/// Budget versus spend for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub budget: Money,
    pub spent: Money,
    /// `budget - spent`, negative when overspent
    pub remaining: Money,
    pub status: BudgetStatus,
    /// Expense transactions booked to this category
    pub transaction_count: usize,
}

impl CategorySummary {
    /// Check if this category is overspent
    pub fn is_overspent(&self) -> bool {
        self.status.is_over()
    }
}

/// Evaluate every category of `spending` against `budgets`, keeping order
pub fn evaluate(spending: &CategorySpending, budgets: &BudgetConfig) -> Vec<CategorySummary> {
    spending
        .iter()
        .map(|row| {
            let budget = budgets.ceiling(row.category);
            let remaining = budget - row.spent;
            CategorySummary {
                category: row.category,
                budget,
                spent: row.spent,
                remaining,
                status: BudgetStatus::from_remaining(remaining),
                transaction_count: row.transaction_count,
            }
        })
        .collect()
}
