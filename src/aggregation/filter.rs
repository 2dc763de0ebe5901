//! Date and type filters
//!
//! Both filters keep the original relative order and never fail: an empty
//! result simply means "no data".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{DateRange, Transaction, TransactionType};

/// Keep transactions dated within `[start, end]`, both ends inclusive.
///
/// An inverted window (`start > end`) matches nothing.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    filter_by_range(transactions, DateRange::new(start, end))
}

/// [`filter_by_date_range`] over a [`DateRange`]
pub fn filter_by_range(transactions: &[Transaction], range: DateRange) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| range.contains(txn.date))
        .cloned()
        .collect()
}

/// Keep transactions of the given type
pub fn filter_by_type(transactions: &[Transaction], kind: TransactionType) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .cloned()
        .collect()
}

/// Type selector that also allows "everything"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    /// The single type this filter selects, if any
    pub fn kind(&self) -> Option<TransactionType> {
        match self {
            Self::All => None,
            Self::Income => Some(TransactionType::Income),
            Self::Expense => Some(TransactionType::Expense),
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Income => f.write_str("income"),
            Self::Expense => f.write_str("expense"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TransactionType>().map(Self::from)
    }
}

/// Apply a [`TypeFilter`]; `All` returns the input unchanged
pub fn filter_by_type_filter(transactions: &[Transaction], filter: TypeFilter) -> Vec<Transaction> {
    match filter.kind() {
        Some(kind) => filter_by_type(transactions, kind),
        None => transactions.to_vec(),
    }
}
