//! Category metadata consistency check
//!
//! Aggregation keeps the first metadata seen per category name. This check
//! reports the later transactions that disagree with it so the data source
//! can be cleaned up. It never fails and never changes the aggregation.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::models::{Category, Transaction, TransactionId, TransactionType};

/// What differs from the first occurrence of a category name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Color, icon or short name differ
    Metadata,
    /// The transaction type differs
    MixedType,
}

/// A transaction whose category disagrees with the first one of its name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryConflict {
    pub category: String,
    pub transaction_id: TransactionId,
    pub kind: ConflictKind,
}

impl fmt::Display for CategoryConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConflictKind::Metadata => write!(
                f,
                "category '{}' on {} has different color/icon/short name than its first use",
                self.category, self.transaction_id
            ),
            ConflictKind::MixedType => write!(
                f,
                "category '{}' on {} is used as both income and expense",
                self.category, self.transaction_id
            ),
        }
    }
}

/// List every transaction that disagrees with the first use of its
/// category name, in input order.
pub fn find_category_conflicts(transactions: &[Transaction]) -> Vec<CategoryConflict> {
    let mut first_seen: HashMap<&str, (&Category, TransactionType)> = HashMap::new();
    let mut conflicts = Vec::new();

    for txn in transactions {
        let name = txn.category.name.as_str();
        let Some((category, kind)) = first_seen.get(name) else {
            first_seen.insert(name, (&txn.category, txn.kind));
            continue;
        };

        if *kind != txn.kind {
            conflicts.push(CategoryConflict {
                category: name.to_string(),
                transaction_id: txn.id,
                kind: ConflictKind::MixedType,
            });
        }
        if !category.same_metadata(&txn.category) {
            conflicts.push(CategoryConflict {
                category: name.to_string(),
                transaction_id: txn.id,
                kind: ConflictKind::Metadata,
            });
        }
    }

    conflicts
}
