//! fintrack - category, budget and net-balance breakdowns
//!
//! This library turns a list of income and expense transactions plus a list
//! of per-category budget targets into the numbers a finance dashboard
//! shows: totals, per-category sums, chart data and budget comparisons.
//!
//! # Architecture
//!
//! - `models`: transactions, budgets, money, periods and date ranges
//! - `aggregation`: pure filtering, totals and budget comparison
//! - `reports`: printable and exportable summaries built on aggregation
//! - `storage`: JSON files on disk plus the sample dataset
//! - `export`: CSV, JSON and YAML writers
//! - `display`: terminal tables
//! - `config`: paths and settings
//! - `cli`: command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::aggregation::{aggregate_by_category, net_balance};
//!
//! let totals = aggregate_by_category(&transactions);
//! println!("{}", net_balance(&transactions));
//! ```

pub mod aggregation;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
