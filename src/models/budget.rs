//! Budget configuration
//!
//! Monthly spending ceilings per category. A category without an entry has a
//! zero ceiling, so any spend against it is over budget.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::money::Money;

/// Mapping from category to a non-negative monthly budget ceiling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<Category, Money>",
    try_from = "BTreeMap<Category, Money>"
)]
pub struct BudgetConfig {
    ceilings: BTreeMap<Category, Money>,
}

impl BudgetConfig {
    /// An empty configuration (every ceiling is zero)
    pub fn new() -> Self {
        Self::default()
    }

    /// The same ceiling for each of `categories`
    pub fn uniform(categories: &[Category], ceiling: Money) -> Result<Self, BudgetError> {
        let mut config = Self::new();
        for &category in categories {
            config.set(category, ceiling)?;
        }
        Ok(config)
    }

    /// Set the ceiling for a category
    pub fn set(&mut self, category: Category, ceiling: Money) -> Result<(), BudgetError> {
        if ceiling.is_negative() {
            return Err(BudgetError::NegativeCeiling { category, ceiling });
        }
        if ceiling > Money::MAX_AMOUNT {
            return Err(BudgetError::CeilingTooLarge { category, ceiling });
        }
        self.ceilings.insert(category, ceiling);
        Ok(())
    }

    /// Builder-style variant of [`BudgetConfig::set`]
    pub fn with(mut self, category: Category, ceiling: Money) -> Result<Self, BudgetError> {
        self.set(category, ceiling)?;
        Ok(self)
    }

    /// The ceiling for a category, zero when unset
    pub fn ceiling(&self, category: Category) -> Money {
        self.ceilings.get(&category).copied().unwrap_or_default()
    }

    /// Whether a ceiling was configured for this category
    pub fn contains(&self, category: Category) -> bool {
        self.ceilings.contains_key(&category)
    }

    /// Iterate over configured ceilings
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.ceilings.iter().map(|(c, m)| (*c, *m))
    }

    pub fn len(&self) -> usize {
        self.ceilings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ceilings.is_empty()
    }
}

impl TryFrom<BTreeMap<Category, Money>> for BudgetConfig {
    type Error = BudgetError;

    fn try_from(ceilings: BTreeMap<Category, Money>) -> Result<Self, Self::Error> {
        let mut config = Self::new();
        for (category, ceiling) in ceilings {
            config.set(category, ceiling)?;
        }
        Ok(config)
    }
}

impl From<BudgetConfig> for BTreeMap<Category, Money> {
    fn from(config: BudgetConfig) -> Self {
        config.ceilings
    }
}

/// Error for an invalid budget ceiling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    #[error("Budget for {category} must not be negative (got {ceiling})")]
    NegativeCeiling { category: Category, ceiling: Money },

    #[error("Budget for {category} exceeds the largest supported amount (got {ceiling})")]
    CeilingTooLarge { category: Category, ceiling: Money },
}
