//! Spending categories
//!
//! Categories form a closed set. A ledger may use any ordered subset of them;
//! labels outside that subset are handled by an [`UnknownCategoryPolicy`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A budget category that expense transactions are bucketed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Food,
    Transport,
    Entertainment,
    Healthcare,
    Utilities,
    /// Catch-all for spending that fits no other category
    Other,
}

impl Category {
    /// Every category, in the default display order
    pub const ALL: [Category; 7] = [
        Category::Housing,
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Healthcare,
        Category::Utilities,
        Category::Other,
    ];

    /// The default ordered list of configured categories
    pub fn defaults() -> Vec<Category> {
        Self::ALL.to_vec()
    }

    /// Display name of the category
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Resolve a free-form label against a list of configured categories
    ///
    /// Matching ignores case and surrounding whitespace. Labels naming a
    /// category that is not configured resolve to `None`.
    pub fn resolve(label: &str, configured: &[Category]) -> Option<Category> {
        label
            .parse::<Category>()
            .ok()
            .filter(|category| configured.contains(category))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryParseError(trimmed.to_string()))
    }
}

/// Error returned when a label names no known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// What to do with a transaction whose category label is not configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCategoryPolicy {
    /// Keep the transaction in the totals and monthly series but leave it out
    /// of the per-category summaries
    #[default]
    Exclude,
    /// Fail validation with an unknown-category error
    Reject,
    /// Book the transaction under [`Category::Other`]
    Fallback,
}

impl fmt::Display for UnknownCategoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclude => write!(f, "exclude"),
            Self::Reject => write!(f, "reject"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}
