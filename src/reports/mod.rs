//! Reports module for budget-tracker
//!
//! The aggregation stages (spending by category, budget status, monthly
//! trend) and the engine that assembles them into a [`Report`].

pub mod budget_status;
pub mod engine;
pub mod monthly;
pub mod spending;

pub use budget_status::{evaluate, BudgetStatus, CategorySummary};
pub use engine::{AnalyticsEngine, ExpenseShare, Report};
pub use monthly::{monthly_series, MonthlyBucket};
pub use spending::{CategorySpending, SpendingByCategory};
