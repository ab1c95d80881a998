//! Terminal display formatting
//!
//! Presentation only: nothing here computes figures, it renders what the
//! reports module produced.

pub mod report;
pub mod transaction;

pub use report::format_report;
pub use transaction::format_transactions;
