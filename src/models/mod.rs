//! Core data models for fintrack
//!
//! Transactions and budgets as they arrive from the data source, plus the
//! value types they are built from (money, categories, periods, ranges).

pub mod budget;
pub mod category;
pub mod date_range;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::CategoryBudget;
pub use category::{short_name_for, Category, CategoryValidationError};
pub use date_range::DateRange;
pub use ids::{BudgetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{BudgetPeriod, PeriodParseError};
pub use transaction::{Transaction, TransactionType};
