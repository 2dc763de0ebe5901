//! Storage layer for fintrack
//!
//! JSON files on disk, loaded into owned vectors that callers hand to the
//! aggregation engine explicitly.

pub mod budgets;
pub mod file_io;
pub mod hygiene;
pub mod seed;
pub mod transactions;

pub use budgets::BudgetStore;
pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use hygiene::HygieneWarning;
pub use transactions::TransactionStore;

use crate::config::paths::FintrackPaths;
use crate::config::settings::Settings;
use crate::error::FintrackError;

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    paths: FintrackPaths,
    pub transactions: TransactionStore,
    pub budgets: BudgetStore,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: FintrackPaths, settings: &Settings) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file())
                .with_conflict_warnings(settings.warn_on_category_conflicts),
            budgets: BudgetStore::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Replace both data files with the sample dataset
    pub fn seed_sample_data(&self) -> Result<(), FintrackError> {
        self.transactions.replace_all(seed::sample_transactions()?)?;
        self.budgets.replace_all(seed::sample_budgets()?)?;
        self.save_all()?;
        tracing::info!(path = %self.paths.data_dir().display(), "wrote sample data");
        Ok(())
    }
}
