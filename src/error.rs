//! Custom error types for budget-tracker
//!
//! Record-level validation failures are kept separate from the application
//! error so callers can report the offending row.

use thiserror::Error;

/// A defect in one input record, raised while building a `TransactionSet`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The date could not be parsed
    #[error("row {row}: malformed date '{value}'")]
    MalformedRecord { row: usize, value: String },

    /// The category label is not one of the configured categories
    #[error("row {row}: unknown category '{value}'")]
    UnknownCategory { row: usize, value: String },

    /// The amount is negative or not a number
    #[error("row {row}: invalid amount '{value}': {reason}")]
    InvalidAmount {
        row: usize,
        value: String,
        reason: &'static str,
    },

    /// The transaction type is neither Income nor Expense
    #[error("row {row}: invalid transaction type '{value}' (expected Income or Expense)")]
    InvalidKind { row: usize, value: String },
}

impl RecordError {
    /// The 1-based row number of the offending record
    pub fn row(&self) -> usize {
        match self {
            Self::MalformedRecord { row, .. }
            | Self::UnknownCategory { row, .. }
            | Self::InvalidAmount { row, .. }
            | Self::InvalidKind { row, .. } => *row,
        }
    }
}

/// The main error type for budget-tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A single invalid record (fail-fast validation)
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// Every invalid record in the batch (collect-all validation)
    #[error("{} invalid records, first: {}", .0.len(), first_message(.0))]
    InvalidRecords(Vec<RecordError>),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for user-supplied arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

fn first_message(errors: &[RecordError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}

impl TrackerError {
    /// Row-level errors carried by this error, if any
    pub fn record_errors(&self) -> &[RecordError] {
        match self {
            Self::InvalidRecord(err) => std::slice::from_ref(err),
            Self::InvalidRecords(errs) => errs,
            _ => &[],
        }
    }

    /// Check if this is a record validation error
    pub fn is_record_error(&self) -> bool {
        matches!(self, Self::InvalidRecord(_) | Self::InvalidRecords(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TrackerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for budget-tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
