//! Reports module for fintrack
//!
//! Reports compose the aggregation engine into printable, exportable
//! summaries: a category breakdown for a date window and a budget
//! overview comparing actuals against targets.

pub mod breakdown;
pub mod budget_overview;

pub use breakdown::{BreakdownSlice, CategoryBreakdownReport};
pub use budget_overview::BudgetOverviewReport;
