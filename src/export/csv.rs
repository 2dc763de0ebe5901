//! CSV export of transaction listings
//!
//! Report CSVs live on the reports themselves; this covers the plain
//! `transactions` listing.

use serde::Serialize;
use std::io::Write;

use super::Exportable;
use crate::aggregation::TypeFilter;
use crate::error::FintrackResult;
use crate::models::{DateRange, Transaction};

/// A filtered transaction list, as printed by `fintrack transactions`
#[derive(Debug, Clone, Serialize)]
pub struct TransactionListing {
    pub range: Option<DateRange>,
    pub filter: TypeFilter,
    pub transactions: Vec<Transaction>,
}

impl Exportable for TransactionListing {
    fn kind(&self) -> &'static str {
        "transactions"
    }

    fn write_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        export_transactions_csv(&self.transactions, writer)
    }
}

/// Export transactions to CSV, one row each, in input order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FintrackResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID",
        "Date",
        "Type",
        "Category",
        "Short Name",
        "Amount",
        "Description",
    ])?;

    for txn in transactions {
        let id = txn.id.get().to_string();
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.format_with_symbol("");

        csv.write_record([
            id.as_str(),
            date.as_str(),
            txn.kind.as_str(),
            txn.category.name.as_str(),
            txn.category.short_name.as_str(),
            amount.as_str(),
            txn.description.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
