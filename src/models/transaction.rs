//! Transaction model
//!
//! A transaction is an immutable record: a non-negative magnitude plus a
//! type that says which way the money moved. Edits replace the record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction (or of a budget target)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Both types, income first
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// Lowercase label used in files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type: {}. Use income or expense",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Magnitude of the transaction; direction comes from `kind`
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Category, embedded by value
    pub category: Category,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Free-text label
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: impl Into<TransactionId>,
        amount: Money,
        kind: TransactionType,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            kind,
            category,
            date,
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The amount with the sign implied by the type (income positive)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.category.name,
            self.signed_amount(),
            self.description
        )
    }
}
