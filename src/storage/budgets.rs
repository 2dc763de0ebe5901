//! Budget store for JSON storage
//!
//! Manages loading and saving category budgets to budgets.json

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FintrackError;
use crate::models::CategoryBudget;

use super::file_io::{read_json, write_json_atomic};
use super::hygiene::budget_warnings;

/// Serializable budget data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    budgets: Vec<CategoryBudget>,
}

/// Store for budget persistence
pub struct BudgetStore {
    path: PathBuf,
    data: RwLock<Vec<CategoryBudget>>,
}

impl BudgetStore {
    /// Create a new budget store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk, logging data-quality warnings
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: BudgetData = read_json(&self.path)?;

        for warning in budget_warnings(&file_data.budgets) {
            tracing::warn!(file = %self.path.display(), "{}", warning);
        }
        tracing::debug!(count = file_data.budgets.len(), "loaded budgets");

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.budgets;

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = BudgetData {
            budgets: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all budgets in file order
    pub fn get_all(&self) -> Result<Vec<CategoryBudget>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Get the budgets whose validity window covers `date`
    pub fn active_on(&self, date: NaiveDate) -> Result<Vec<CategoryBudget>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .filter(|budget| budget.is_active_on(date))
            .cloned()
            .collect())
    }

    /// Replace the whole budget list (in memory; call `save` to persist)
    pub fn replace_all(&self, budgets: Vec<CategoryBudget>) -> Result<(), FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = budgets;
        Ok(())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
