//! Monthly income and expense trend

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Money, Month, TransactionKind, TransactionSet};

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub month: Month,
    pub total_income: Money,
    pub total_expense: Money,
}

impl MonthlyBucket {
    fn empty(month: Month) -> Self {
        Self {
            month,
            total_income: Money::zero(),
            total_expense: Money::zero(),
        }
    }

    /// Income minus expense for the month
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }
}

/// One bucket per month present in `transactions`, oldest first
///
/// A month with only one kind of transaction gets zero for the other kind.
pub fn monthly_series(transactions: &TransactionSet) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<Month, MonthlyBucket> = BTreeMap::new();

    for txn in transactions {
        let month = txn.month();
        let bucket = buckets
            .entry(month)
            .or_insert_with(|| MonthlyBucket::empty(month));
        match txn.kind {
            TransactionKind::Income => bucket.total_income += txn.amount,
            TransactionKind::Expense => bucket.total_expense += txn.amount,
        }
    }

    buckets.into_values().collect()
}
