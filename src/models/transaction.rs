//! Transaction model
//!
//! A [`RawRecord`] is what the ingestion side hands over: four untrusted
//! strings. A [`Transaction`] is the validated form, produced only by
//! [`TransactionSet`](super::TransactionSet).

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::Money;
use super::period::Month;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("income") {
            Ok(Self::Income)
        } else if s.eq_ignore_ascii_case("expense") {
            Ok(Self::Expense)
        } else {
            Err(s.to_string())
        }
    }
}

/// An unvalidated ledger row as supplied by a data source
///
/// Field names follow the `Date,Category,Amount,Type` CSV layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date", alias = "date", alias = "DATE")]
    pub date: String,

    #[serde(rename = "Category", alias = "category", alias = "CATEGORY")]
    pub category: String,

    #[serde(rename = "Amount", alias = "amount", alias = "AMOUNT")]
    pub amount: String,

    #[serde(
        rename = "Type",
        alias = "type",
        alias = "TYPE",
        alias = "Kind",
        alias = "kind"
    )]
    pub kind: String,
}

impl RawRecord {
    /// Build a record from anything string-like
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            kind: kind.into(),
        }
    }
}

/// A validated financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// 1-based position of the source record
    pub row: usize,

    /// Transaction date
    pub date: NaiveDate,

    /// Resolved category, `None` when the label was excluded by policy
    pub category: Option<Category>,

    /// Category label as it appeared in the source
    pub label: String,

    /// Amount, never negative
    pub amount: Money,

    /// Income or expense
    pub kind: TransactionKind,
}

impl Transaction {
    /// Calendar month this transaction falls in
    pub fn month(&self) -> Month {
        Month::of(self.date)
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }
}

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%m/%d/%y", "%d %b %Y", "%b %d, %Y",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse with `format`, refusing `%Y` matches on short years
///
/// chrono's `%Y` also accepts two-digit years; those are left to the `%y`
/// formats.
fn parse_with(s: &str, format: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, format)
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, format).ok().map(|dt| dt.date()))?;
    if format.contains("%Y") && date.year() < 1000 {
        return None;
    }
    Some(date)
}

/// Parse a date string, trying the primary format before common alternatives
///
/// Date-times are accepted and truncated to their date.
pub fn parse_date(s: &str, primary_format: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = parse_with(s, primary_format) {
        return Some(date);
    }

    DATE_FORMATS
        .iter()
        .chain(DATETIME_FORMATS.iter())
        .find_map(|format| parse_with(s, format))
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(" expense ".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert_eq!("Refund".parse::<TransactionKind>(), Err("Refund".to_string()));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2025-03-14", "%Y-%m-%d"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("2025/03/14", "%Y-%m-%d"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("03/14/2025", "%Y-%m-%d"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("2025-03-14 08:30:00", "%Y-%m-%d"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("2025-03-14T08:30:00", "%Y-%m-%d"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("2025-03-14T08:30:00+02:00", "%Y-%m-%d"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("14 Mar 2025", "%Y-%m-%d"), Some(ymd(2025, 3, 14)));
    }

    #[test]
    fn test_parse_date_two_digit_year() {
        assert_eq!(parse_date("03/14/25", "%Y-%m-%d"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("14/03/25", "%d/%m/%y"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("14/03/2025", "%d/%m/%y"), Some(ymd(2025, 3, 14)));
        assert_eq!(parse_date("25-03-14", "%Y-%m-%d"), None);
    }

    #[test]
    fn test_primary_format_wins() {
        // Ambiguous day/month: the configured format decides
        assert_eq!(parse_date("04/03/2025", "%d/%m/%Y"), Some(ymd(2025, 3, 4)));
        assert_eq!(parse_date("04/03/2025", "%m/%d/%Y"), Some(ymd(2025, 4, 3)));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("", "%Y-%m-%d"), None);
        assert_eq!(parse_date("yesterday", "%Y-%m-%d"), None);
        assert_eq!(parse_date("2025-13-01", "%Y-%m-%d"), None);
    }

    #[test]
    fn test_transaction_month() {
        let txn = Transaction {
            row: 1,
            date: ymd(2024, 12, 31),
            category: Some(Category::Food),
            label: "Food".into(),
            amount: Money::from_units(5),
            kind: TransactionKind::Expense,
        };
        assert_eq!(txn.month(), Month::from_ym_opt(2024, 12).unwrap());
        assert!(txn.is_expense());
    }
}
