//! Validated transaction batch
//!
//! A `TransactionSet` is built once from raw records and never changes
//! afterwards. Every aggregation in [`crate::reports`] reads from one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{Category, UnknownCategoryPolicy};
use super::money::Money;
use super::period::Month;
use super::transaction::{parse_date, RawRecord, Transaction, TransactionKind};
use crate::error::{RecordError, TrackerError, TrackerResult};

/// How a batch reacts to invalid records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Stop at the first invalid record
    #[default]
    FailFast,
    /// Validate every record and report all failures together
    CollectAll,
}

/// Rules applied while validating raw records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPolicy {
    /// Known categories, in display order
    pub categories: Vec<Category>,
    /// Treatment of labels outside `categories`
    pub unknown_category: UnknownCategoryPolicy,
    /// Fail-fast or collect-all
    pub validation: ValidationMode,
    /// Date format tried before the built-in alternatives
    pub date_format: String,
}

impl Default for RecordPolicy {
    fn default() -> Self {
        Self {
            categories: Category::defaults(),
            unknown_category: UnknownCategoryPolicy::default(),
            validation: ValidationMode::default(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl RecordPolicy {
    /// Validate a single record; `row` is its 1-based position
    pub fn validate(&self, row: usize, record: &RawRecord) -> Result<Transaction, RecordError> {
        let date = parse_date(&record.date, &self.date_format).ok_or_else(|| {
            RecordError::MalformedRecord {
                row,
                value: record.date.clone(),
            }
        })?;

        let label = record.category.trim().to_string();
        let category = match Category::resolve(&label, &self.categories) {
            Some(category) => Some(category),
            None => match self.unknown_category {
                UnknownCategoryPolicy::Exclude => None,
                UnknownCategoryPolicy::Fallback => Some(Category::Other),
                UnknownCategoryPolicy::Reject => {
                    return Err(RecordError::UnknownCategory { row, value: label });
                }
            },
        };

        let amount = Money::parse(&record.amount).map_err(|_| RecordError::InvalidAmount {
            row,
            value: record.amount.clone(),
            reason: "not a number",
        })?;
        if amount.is_negative() {
            return Err(RecordError::InvalidAmount {
                row,
                value: record.amount.clone(),
                reason: "amount must not be negative",
            });
        }
        if amount > Money::MAX_AMOUNT {
            return Err(RecordError::InvalidAmount {
                row,
                value: record.amount.clone(),
                reason: "amount exceeds 10,000,000,000,000.00",
            });
        }

        let kind = record
            .kind
            .parse::<TransactionKind>()
            .map_err(|value| RecordError::InvalidKind { row, value })?;

        Ok(Transaction {
            row,
            date,
            category,
            label,
            amount,
            kind,
        })
    }
}

/// An immutable, validated collection of transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransactionSet {
    transactions: Vec<Transaction>,
}

impl TransactionSet {
    /// An empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate raw records into a transaction set
    ///
    /// Rows are numbered from 1 in the order they are yielded. In
    /// [`ValidationMode::FailFast`] the first invalid record is returned as
    /// [`TrackerError::InvalidRecord`]; in [`ValidationMode::CollectAll`] every
    /// failure is returned as [`TrackerError::InvalidRecords`]. No partial set
    /// is ever produced.
    pub fn from_records<I>(records: I, policy: &RecordPolicy) -> TrackerResult<Self>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut transactions = Vec::new();
        let mut errors = Vec::new();
        // Sum of every accepted amount; bounds each aggregate computed later
        let mut volume = Money::zero();

        for (idx, record) in records.into_iter().enumerate() {
            let validated = policy.validate(idx + 1, &record).and_then(|txn| {
                volume = volume.checked_add(txn.amount).ok_or_else(|| {
                    RecordError::InvalidAmount {
                        row: txn.row,
                        value: record.amount.clone(),
                        reason: "batch total exceeds the supported range",
                    }
                })?;
                Ok(txn)
            });
            match validated {
                Ok(txn) => {
                    if txn.category.is_none() {
                        tracing::warn!(
                            row = txn.row,
                            label = %txn.label,
                            "category not configured, excluded from category summaries"
                        );
                    }
                    transactions.push(txn);
                }
                Err(err) => match policy.validation {
                    ValidationMode::FailFast => return Err(TrackerError::InvalidRecord(err)),
                    ValidationMode::CollectAll => errors.push(err),
                },
            }
        }

        if !errors.is_empty() {
            return Err(TrackerError::InvalidRecords(errors));
        }

        tracing::debug!(count = transactions.len(), "validated transaction batch");
        Ok(Self { transactions })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Total of all transactions of one kind
    pub fn total(&self, kind: TransactionKind) -> Money {
        self.iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// The subset of transactions dated within `month`
    pub fn for_month(&self, month: Month) -> Self {
        Self {
            transactions: self
                .iter()
                .filter(|t| month.contains(t.date))
                .cloned()
                .collect(),
        }
    }

    /// Transactions ordered newest first; ties keep their input order
    pub fn newest_first(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Earliest and latest transaction dates
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let earliest = self.iter().map(|t| t.date).min()?;
        let latest = self.iter().map(|t| t.date).max()?;
        Some((earliest, latest))
    }
}

impl<'a> IntoIterator for &'a TransactionSet {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, category: &str, amount: &str, kind: &str) -> RawRecord {
        RawRecord::new(date, category, amount, kind)
    }

    #[test]
    fn test_valid_records() {
        let set = TransactionSet::from_records(
            vec![
                record("2025-01-05", "Food", "12.50", "Expense"),
                record("2025-01-06", "housing", "900", "expense"),
                record("2025-01-31", "Other", "2500", "INCOME"),
            ],
            &RecordPolicy::default(),
        )
        .unwrap();

        assert_eq!(set.len(), 3);
        let first = set.iter().next().unwrap();
        assert_eq!(first.row, 1);
        assert_eq!(first.category, Some(Category::Food));
        assert_eq!(first.amount, Money::from_cents(1250));
        assert_eq!(set.total(TransactionKind::Expense), Money::from_cents(91250));
        assert_eq!(set.total(TransactionKind::Income), Money::from_units(2500));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = TransactionSet::from_records(
            vec![record("2025-01-05", "Food", "-5", "Expense")],
            &RecordPolicy::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TrackerError::InvalidRecord(RecordError::InvalidAmount { row: 1, .. })
        ));
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let err = TransactionSet::from_records(
            vec![record("2025-01-05", "Food", "twelve", "Expense")],
            &RecordPolicy::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TrackerError::InvalidRecord(RecordError::InvalidAmount {
                reason: "not a number",
                ..
            })
        ));
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let policy = RecordPolicy {
            validation: ValidationMode::CollectAll,
            ..RecordPolicy::default()
        };
        let err = TransactionSet::from_records(
            vec![
                record("2025-01-05", "Food", "92233720368547758", "Expense"),
                record("2025-01-06", "Food", "92233720368547758", "Expense"),
                record("2025-01-07", "Food", "10000000000000", "Expense"),
            ],
            &policy,
        )
        .unwrap_err();

        let rows: Vec<usize> = err.record_errors().iter().map(RecordError::row).collect();
        assert_eq!(rows, vec![1, 2]);
        assert!(err.record_errors().iter().all(|e| matches!(
            e,
            RecordError::InvalidAmount {
                reason: "amount exceeds 10,000,000,000,000.00",
                ..
            }
        )));
    }

    #[test]
    fn test_batch_total_overflow_rejected() {
        // Each row is at the cap; row 9224 pushes the running total past i64::MAX
        let records = (0..9300).map(|_| record("2025-01-05", "Food", "10000000000000", "Expense"));
        let err = TransactionSet::from_records(records, &RecordPolicy::default()).unwrap_err();

        assert!(matches!(
            err,
            TrackerError::InvalidRecord(RecordError::InvalidAmount {
                row: 9224,
                reason: "batch total exceeds the supported range",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let err = TransactionSet::from_records(
            vec![
                record("2025-01-05", "Food", "5", "Expense"),
                record("not-a-date", "Food", "5", "Expense"),
            ],
            &RecordPolicy::default(),
        )
        .unwrap_err();

        assert_eq!(
            err.record_errors(),
            &[RecordError::MalformedRecord {
                row: 2,
                value: "not-a-date".into()
            }]
        );
    }

    #[test]
    fn test_invalid_kind_rejected() {
        let err = TransactionSet::from_records(
            vec![record("2025-01-05", "Food", "5", "Transfer")],
            &RecordPolicy::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TrackerError::InvalidRecord(RecordError::InvalidKind { row: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_category_policies() {
        let records = || vec![record("2025-01-05", "Crypto", "40", "Expense")];

        let excluded = TransactionSet::from_records(records(), &RecordPolicy::default()).unwrap();
        let txn = excluded.iter().next().unwrap();
        assert_eq!(txn.category, None);
        assert_eq!(txn.label, "Crypto");

        let fallback_policy = RecordPolicy {
            unknown_category: UnknownCategoryPolicy::Fallback,
            ..RecordPolicy::default()
        };
        let fallback = TransactionSet::from_records(records(), &fallback_policy).unwrap();
        assert_eq!(fallback.iter().next().unwrap().category, Some(Category::Other));

        let reject_policy = RecordPolicy {
            unknown_category: UnknownCategoryPolicy::Reject,
            ..RecordPolicy::default()
        };
        let err = TransactionSet::from_records(records(), &reject_policy).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::InvalidRecord(RecordError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_unconfigured_known_category_is_unknown() {
        let policy = RecordPolicy {
            categories: vec![Category::Food],
            ..RecordPolicy::default()
        };
        let set = TransactionSet::from_records(
            vec![record("2025-01-05", "Transport", "40", "Expense")],
            &policy,
        )
        .unwrap();
        assert_eq!(set.iter().next().unwrap().category, None);
    }

    #[test]
    fn test_collect_all_reports_every_row() {
        let policy = RecordPolicy {
            validation: ValidationMode::CollectAll,
            ..RecordPolicy::default()
        };
        let err = TransactionSet::from_records(
            vec![
                record("bad", "Food", "5", "Expense"),
                record("2025-01-05", "Food", "5", "Expense"),
                record("2025-01-05", "Food", "-1", "Expense"),
            ],
            &policy,
        )
        .unwrap_err();

        let rows: Vec<usize> = err.record_errors().iter().map(RecordError::row).collect();
        assert_eq!(rows, vec![1, 3]);
    }

    #[test]
    fn test_for_month_and_ordering() {
        let set = TransactionSet::from_records(
            vec![
                record("2025-01-05", "Food", "1", "Expense"),
                record("2025-02-01", "Food", "2", "Expense"),
                record("2025-01-20", "Food", "3", "Expense"),
            ],
            &RecordPolicy::default(),
        )
        .unwrap();

        let january = set.for_month(Month::from_ym_opt(2025, 1).unwrap());
        assert_eq!(january.len(), 2);

        let rows: Vec<usize> = set.newest_first().iter().map(|t| t.row).collect();
        assert_eq!(rows, vec![2, 3, 1]);

        let (earliest, latest) = set.date_range().unwrap();
        assert_eq!(earliest, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(latest, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert!(TransactionSet::empty().date_range().is_none());
    }
}
