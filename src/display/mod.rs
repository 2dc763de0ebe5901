//! Display formatting for terminal output
//!
//! Tables, colors and percentage labels shared by the CLI and the reports.

pub mod report;
pub mod transaction;

pub use report::{
    format_bar, format_comparison_table, format_hundredths, format_money_colored,
    format_percentage, truncate,
};
pub use transaction::{format_transaction_short, format_transaction_table};
