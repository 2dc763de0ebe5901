//! `fintrack transactions`: list and export transactions

use chrono::NaiveDate;
use clap::Args;

use super::{parse_optional_date, write_export, OutputArgs};
use crate::aggregation::{filter_by_range, filter_by_type_filter, TypeFilter};
use crate::config::settings::Settings;
use crate::display::format_transaction_table;
use crate::error::{FintrackError, FintrackResult};
use crate::export::TransactionListing;
use crate::models::{DateRange, Transaction, TransactionId};
use crate::storage::Storage;

/// Arguments for `fintrack transactions`
#[derive(Args, Debug, Clone)]
pub struct TransactionsArgs {
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    pub end: Option<String>,

    /// Show a single transaction by ID
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub id: Option<u64>,

    /// Only show one type: all, income or expense
    #[arg(short = 't', long = "type", default_value = "all")]
    pub type_filter: TypeFilter,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Resolve the optional window. With only one end given, the other end is
/// left open.
fn resolve_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<DateRange> {
    match (start, end) {
        (None, None) => None,
        (start, end) => Some(DateRange::new(
            start.unwrap_or(NaiveDate::MIN),
            end.unwrap_or(NaiveDate::MAX),
        )),
    }
}

/// Select the transactions the arguments ask for
pub fn select_transactions(
    transactions: &[Transaction],
    range: Option<DateRange>,
    filter: TypeFilter,
) -> Vec<Transaction> {
    match range {
        Some(range) => filter_by_type_filter(&filter_by_range(transactions, range), filter),
        None => filter_by_type_filter(transactions, filter),
    }
}

/// Handle `fintrack transactions`
pub fn handle_transactions_command(
    storage: &Storage,
    settings: &Settings,
    args: TransactionsArgs,
) -> FintrackResult<()> {
    let start = parse_optional_date(args.start.as_deref(), "start")?;
    let end = parse_optional_date(args.end.as_deref(), "end")?;
    let range = resolve_range(start, end);

    let source = match args.id {
        Some(id) => {
            let txn = storage
                .transactions
                .get(TransactionId::new(id))?
                .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;
            vec![txn]
        }
        None => storage.transactions.get_all()?,
    };

    let transactions = select_transactions(&source, range, args.type_filter);
    tracing::debug!(count = transactions.len(), filter = %args.type_filter, "selected transactions");

    if args.output.is_terminal() {
        print!(
            "{}",
            format_transaction_table(&transactions, &settings.currency_symbol, &settings.date_format)
        );
        return Ok(());
    }

    let listing = TransactionListing {
        range,
        filter: args.type_filter,
        transactions,
    };
    write_export(&listing, &args.output, "Transactions")
}
