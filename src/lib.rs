//! budget-tracker - personal finance budget tracking
//!
//! Reads a ledger of dated income and expense records, validates it, and
//! produces a report: totals, per-category spending against budget
//! ceilings, and a month-by-month series.
//!
//! # Architecture
//!
//! - `models`: money, categories, transactions, months and budgets
//! - `ingest`: CSV reading and the synthetic sample generator
//! - `reports`: aggregation and the analytics engine
//! - `display`: terminal tables
//! - `export`: JSON, YAML and CSV report output
//! - `config`: settings and path management
//! - `cli`: command handlers
//! - `error`: error types
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::models::{BudgetConfig, Category, Money, RawRecord, RecordPolicy};
//! use budget_tracker::reports::AnalyticsEngine;
//!
//! let budgets = BudgetConfig::uniform(&Category::defaults(), Money::from_units(100)).unwrap();
//! let report = AnalyticsEngine::report_from_records(
//!     vec![RawRecord::new("2025-01-10", "Food", "150", "Expense")],
//!     &RecordPolicy::default(),
//!     &budgets,
//! )
//! .unwrap();
//!
//! assert_eq!(report.over_budget_count(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod reports;

pub use error::{TrackerError, TrackerResult};
