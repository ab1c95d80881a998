//! Ingestion module for budget-tracker
//!
//! Turns external data into raw records: CSV files and the synthetic sample
//! generator.

pub mod csv;
pub mod sample;

pub use self::csv::{read_records, read_records_from_path, write_records};
pub use sample::{Entropy, OsEntropy, SampleGenerator};
