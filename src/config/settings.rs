//! User settings for fintrack
//!
//! Display preferences and the defaults the report commands fall back to
//! when a flag is not given.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::aggregation::BudgetJoin;
use crate::error::FintrackError;
use crate::models::BudgetPeriod;
use crate::storage::file_io::{read_json_required, write_json_atomic};

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Period used by `budgets` and `breakdown --period` when none is given
    #[serde(default)]
    pub default_period: BudgetPeriod,

    /// How chart data is matched against budgets
    #[serde(default)]
    pub budget_join: BudgetJoin,

    /// Log category metadata conflicts found while loading transactions
    #[serde(default = "default_true")]
    pub warn_on_category_conflicts: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_period: BudgetPeriod::default(),
            budget_join: BudgetJoin::default(),
            warn_on_category_conflicts: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        read_json_required(&settings_path)
            .map_err(|e| FintrackError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
