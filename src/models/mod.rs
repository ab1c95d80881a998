//! Core data models for budget-tracker
//!
//! Money, categories, transactions, calendar months and budget ceilings.

pub mod budget;
pub mod category;
pub mod money;
pub mod period;
pub mod transaction;
pub mod transaction_set;

pub use budget::{BudgetConfig, BudgetError};
pub use category::{Category, UnknownCategoryPolicy};
pub use money::Money;
pub use period::Month;
pub use transaction::{RawRecord, Transaction, TransactionKind};
pub use transaction_set::{RecordPolicy, TransactionSet, ValidationMode};
