//! Synthetic sample ledger
//!
//! Used when no data source is supplied. Each record gets a date from the 30
//! days ending on `today`, a category drawn uniformly from the configured
//! list, a whole amount in `[10, 500)`, and is an income with probability 0.2.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::models::{Category, RawRecord, TransactionKind};

/// Number of trailing days sample dates are drawn from
pub const SAMPLE_DAYS: i64 = 30;
/// Inclusive lower bound of sample amounts
pub const MIN_AMOUNT: u64 = 10;
/// Exclusive upper bound of sample amounts
pub const MAX_AMOUNT: u64 = 500;
/// Probability that a sample record is income, in percent
pub const INCOME_PERCENT: u64 = 20;

/// A source of uniformly distributed 64-bit values
pub trait Entropy {
    fn next_u64(&mut self) -> u64;

    /// A value in `0..bound`; `bound` must be non-zero
    fn below(&mut self, bound: u64) -> u64 {
        // Multiply-shift keeps the bias negligible for small bounds
        ((self.next_u64() as u128 * bound as u128) >> 64) as u64
    }
}

/// Entropy backed by random (v4) UUIDs, i.e. the operating system RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    fn next_u64(&mut self) -> u64 {
        // Version and variant bits sit in different halves, so folding the
        // halves together yields 64 uniform bits
        let value = Uuid::new_v4().as_u128();
        ((value >> 64) as u64) ^ (value as u64)
    }
}

/// Generates synthetic raw records
pub struct SampleGenerator<E: Entropy = OsEntropy> {
    entropy: E,
    categories: Vec<Category>,
    today: NaiveDate,
}

impl SampleGenerator<OsEntropy> {
    /// A generator using OS randomness
    pub fn new(categories: Vec<Category>, today: NaiveDate) -> Self {
        Self::with_entropy(OsEntropy, categories, today)
    }
}

impl<E: Entropy> SampleGenerator<E> {
    /// A generator drawing from the given entropy source
    pub fn with_entropy(entropy: E, categories: Vec<Category>, today: NaiveDate) -> Self {
        let categories = if categories.is_empty() {
            Category::defaults()
        } else {
            categories
        };
        Self {
            entropy,
            categories,
            today,
        }
    }

    /// Produce one record
    pub fn next_record(&mut self) -> RawRecord {
        let days_back = self.entropy.below(SAMPLE_DAYS as u64) as i64;
        let date = self.today - Duration::days(days_back);

        let idx = self.entropy.below(self.categories.len() as u64) as usize;
        let category = self.categories[idx];

        let amount = MIN_AMOUNT + self.entropy.below(MAX_AMOUNT - MIN_AMOUNT);

        let kind = if self.entropy.below(100) < INCOME_PERCENT {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };

        RawRecord::new(
            date.format("%Y-%m-%d").to_string(),
            category.name(),
            amount.to_string(),
            kind.to_string(),
        )
    }

    /// Produce `count` records
    pub fn generate(&mut self, count: usize) -> Vec<RawRecord> {
        let records: Vec<RawRecord> = (0..count).map(|_| self.next_record()).collect();
        tracing::info!(count, "generated sample records");
        records
    }
}
