//! Transaction store for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The file
//! order is kept as-is since category totals follow first-seen order.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::FintrackError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::hygiene::transaction_warnings;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Store for transaction persistence
pub struct TransactionStore {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
    warn_on_conflicts: bool,
}

impl TransactionStore {
    /// Create a new transaction store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            warn_on_conflicts: true,
        }
    }

    /// Enable or disable category conflict warnings on load
    pub fn with_conflict_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_conflicts = enabled;
        self
    }

    /// Load transactions from disk, logging data-quality warnings
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: TransactionData = read_json(&self.path)?;

        for warning in transaction_warnings(&file_data.transactions, self.warn_on_conflicts) {
            tracing::warn!(file = %self.path.display(), "{}", warning);
        }
        tracing::debug!(count = file_data.transactions.len(), "loaded transactions");

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.transactions;

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|txn| txn.id == id).cloned())
    }

    /// Get all transactions in file order
    pub fn get_all(&self) -> Result<Vec<Transaction>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Replace the whole transaction list (in memory; call `save` to persist)
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = transactions;
        Ok(())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let store = TransactionStore::new(path);
        (temp_dir, store)
    }

    fn txn(id: u64, cents: i64, name: &str) -> Transaction {
        Transaction::new(
            id,
            Money::from_cents(cents),
            TransactionType::Expense,
            Category::new(name, "#FF6B6B", "🍽️"),
            NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload_keeps_order() {
        let (temp_dir, store) = create_test_store();
        store
            .replace_all(vec![txn(3, 100, "Shopping"), txn(1, 200, "Food"), txn(2, 300, "Health")])
            .unwrap();
        store.save().unwrap();

        let reloaded = TransactionStore::new(temp_dir.path().join("transactions.json"));
        reloaded.load().unwrap();

        let ids: Vec<u64> = reloaded.get_all().unwrap().iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(
            reloaded.get(TransactionId::new(1)).unwrap().unwrap().category.name,
            "Food"
        );
        assert!(reloaded.get(TransactionId::new(9)).unwrap().is_none());
    }

    #[test]
    fn test_load_fixture_shape() {
        let (temp_dir, store) = create_test_store();
        std::fs::write(
            temp_dir.path().join("transactions.json"),
            r##"{"transactions": [{
                "id": 4,
                "category": {"name": "Food", "color": "#FF6B6B", "icon": "🍽️", "shortName": "FOD"},
                "amount": 35.20,
                "date": "2025-07-27",
                "description": "Dinner",
                "type": "expense"
            }]}"##,
        )
        .unwrap();

        store.load().unwrap();
        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].amount.cents(), 3520);
        assert_eq!(all[0].category.short_name, "FOD");
    }

    #[test]
    fn test_load_with_conflicts_still_succeeds() {
        let (_temp_dir, store) = create_test_store();
        let mut odd = txn(2, -50, "Food");
        odd.category.color = "#000000".into();
        store.replace_all(vec![txn(1, 100, "Food"), odd]).unwrap();
        store.save().unwrap();

        store.load().unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }
}
