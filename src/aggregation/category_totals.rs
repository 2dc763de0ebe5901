//! Group-by-category reduction and pie-chart projection

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Category, Money, Transaction, TransactionType};

/// Sum of the transactions sharing one category name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category metadata from the first transaction seen with this name
    pub category: Category,
    /// Summed amount
    pub amount: Money,
    /// Type of the first transaction seen with this name
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Mapping from category name to [`CategoryTotal`]
///
/// Iteration follows the order in which each name was first seen, so two
/// calls over the same input always yield the same sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction's amount to its category bucket.
    ///
    /// The first transaction for a name fixes the bucket's metadata and
    /// type; later ones only contribute their amount.
    pub fn add(&mut self, transaction: &Transaction) {
        match self.index.get(&transaction.category.name) {
            Some(&slot) => self.entries[slot].amount += transaction.amount,
            None => {
                self.index
                    .insert(transaction.category.name.clone(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category: transaction.category.clone(),
                    amount: transaction.amount,
                    kind: transaction.kind,
                });
            }
        }
    }

    /// Look up a bucket by category name
    pub fn get(&self, name: &str) -> Option<&CategoryTotal> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.name.as_str())
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.entries.iter()
    }

    /// Sum over every bucket
    pub fn grand_total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a Transaction> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        let mut totals = Self::new();
        for transaction in iter {
            totals.add(transaction);
        }
        totals
    }
}

/// Sum transaction amounts per category name
pub fn aggregate_by_category(transactions: &[Transaction]) -> CategoryTotals {
    transactions.iter().collect()
}

/// A category total in the shape a chart renderer consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartDatum {
    pub name: String,
    pub amount: Money,
    pub color: String,
    pub icon: String,
    pub short_name: String,
}

impl From<&CategoryTotal> for PieChartDatum {
    fn from(total: &CategoryTotal) -> Self {
        Self {
            name: total.category.name.clone(),
            amount: total.amount,
            color: total.category.color.clone(),
            icon: total.category.icon.clone(),
            short_name: total.category.short_name.clone(),
        }
    }
}

/// Project every bucket into a chart datum, one per category name
pub fn to_pie_chart_data(totals: &CategoryTotals) -> Vec<PieChartDatum> {
    totals.iter().map(PieChartDatum::from).collect()
}

/// A slice's share of the chart total, in percent.
///
/// `None` when the total is zero.
pub fn share_of_total(amount: Money, total: Money) -> Option<f64> {
    if total.is_zero() {
        None
    } else {
        Some(amount.cents() as f64 / total.cents() as f64 * 100.0)
    }
}
