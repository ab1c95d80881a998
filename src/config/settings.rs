//! User settings for budget-tracker
//!
//! Categories, budget ceilings, validation policy and display preferences.
//! Settings are read once at startup and never mutated during a report run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{
    BudgetConfig, Category, Money, RecordPolicy, UnknownCategoryPolicy, ValidationMode,
};

/// User settings for budget-tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Configured categories, in display order
    #[serde(default = "Category::defaults")]
    pub categories: Vec<Category>,

    /// Per-category budget ceilings in cents, overriding `default_budget`
    #[serde(default)]
    pub budgets: BTreeMap<Category, Money>,

    /// Ceiling in cents for categories without an explicit budget
    #[serde(default = "default_budget")]
    pub default_budget: Money,

    /// Treatment of category labels outside `categories`
    #[serde(default)]
    pub unknown_category: UnknownCategoryPolicy,

    /// Fail on the first invalid record or collect them all
    #[serde(default)]
    pub validation: ValidationMode,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format tried first when parsing records (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of records in a generated sample batch
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_budget() -> Money {
    Money::from_units(1000)
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_sample_size() -> usize {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            categories: Category::defaults(),
            budgets: BTreeMap::new(),
            default_budget: default_budget(),
            unknown_category: UnknownCategoryPolicy::default(),
            validation: ValidationMode::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            sample_size: default_sample_size(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        tracing::debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the settings describe a usable configuration
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.categories.is_empty() {
            return Err(TrackerError::Config(
                "At least one category must be configured".into(),
            ));
        }
        if self.default_budget.is_negative() {
            return Err(TrackerError::Config(format!(
                "Default budget must not be negative (got {})",
                self.default_budget
            )));
        }
        if let Some((category, ceiling)) = self.budgets.iter().find(|(_, m)| m.is_negative()) {
            return Err(TrackerError::Config(format!(
                "Budget for {} must not be negative (got {})",
                category, ceiling
            )));
        }
        Ok(())
    }

    /// Override one category's ceiling
    pub fn set_budget(&mut self, category: Category, ceiling: Money) -> Result<(), TrackerError> {
        if ceiling.is_negative() {
            return Err(TrackerError::Config(format!(
                "Budget for {} must not be negative (got {})",
                category, ceiling
            )));
        }
        self.budgets.insert(category, ceiling);
        Ok(())
    }

    /// Apply a `Category=Amount` override, as given on the command line
    pub fn apply_budget_override(&mut self, assignment: &str) -> Result<(), TrackerError> {
        let (name, amount) = assignment.split_once('=').ok_or_else(|| {
            TrackerError::Config(format!(
                "Invalid budget '{}', expected Category=Amount (e.g. Food=250)",
                assignment
            ))
        })?;
        let category: Category = name
            .parse()
            .map_err(|e| TrackerError::Config(format!("{}", e)))?;
        let ceiling = Money::parse(amount)
            .map_err(|e| TrackerError::Config(format!("Budget for {}: {}", category, e)))?;
        self.set_budget(category, ceiling)
    }

    /// Budget ceilings for every configured category
    pub fn budget_config(&self) -> Result<BudgetConfig, TrackerError> {
        let mut config = BudgetConfig::new();
        for &category in &self.categories {
            let ceiling = self
                .budgets
                .get(&category)
                .copied()
                .unwrap_or(self.default_budget);
            config
                .set(category, ceiling)
                .map_err(|e| TrackerError::Config(e.to_string()))?;
        }
        Ok(config)
    }

    /// Validation rules for incoming records
    pub fn record_policy(&self) -> RecordPolicy {
        RecordPolicy {
            categories: self.categories.clone(),
            unknown_category: self.unknown_category,
            validation: self.validation,
            date_format: self.date_format.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.categories.len(), 7);
        assert_eq!(settings.default_budget, Money::from_units(1000));
        assert_eq!(settings.unknown_category, UnknownCategoryPolicy::Exclude);
        assert_eq!(settings.validation, ValidationMode::FailFast);
    }

    #[test]
    fn test_budget_config_uses_default_and_overrides() {
        let mut settings = Settings::default();
        settings.apply_budget_override("food=250.50").unwrap();

        let config = settings.budget_config().unwrap();
        assert_eq!(config.len(), 7);
        assert_eq!(config.ceiling(Category::Food), Money::from_cents(25050));
        assert_eq!(config.ceiling(Category::Housing), Money::from_units(1000));
    }

    #[test]
    fn test_bad_overrides() {
        let mut settings = Settings::default();
        assert!(settings.apply_budget_override("Food").is_err());
        assert!(settings.apply_budget_override("Crypto=10").is_err());
        assert!(settings.apply_budget_override("Food=-10").is_err());
        assert!(settings.apply_budget_override("Food=lots").is_err());
        assert!(settings.budgets.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.categories = vec![Category::Food, Category::Other];
        settings.unknown_category = UnknownCategoryPolicy::Reject;
        settings.set_budget(Category::Food, Money::from_units(300)).unwrap();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"budgets": {"Food": 20000}, "unknown_category": "fallback"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.categories, Category::defaults());
        assert_eq!(loaded.budgets[&Category::Food], Money::from_units(200));
        assert_eq!(loaded.unknown_category, UnknownCategoryPolicy::Fallback);
        assert_eq!(loaded.record_policy().unknown_category, UnknownCategoryPolicy::Fallback);
    }

    #[test]
    fn test_negative_budget_in_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_budget": -1}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
