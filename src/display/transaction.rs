//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{Money, Transaction};

#[derive(Tabled)]
struct TransactionLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Render a transaction list as a table, followed by a count line
pub fn format_transaction_table(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let lines = transactions.iter().map(|txn| TransactionLine {
        id: txn.id.to_string(),
        date: txn.date.format(date_format).to_string(),
        kind: txn.kind.to_string(),
        category: format!("{} {}", txn.category.icon, txn.category.name)
            .trim()
            .to_string(),
        amount: txn.signed_amount().format_with_symbol(symbol),
        description: truncate(&txn.description, 30),
    });

    let mut table = Table::new(lines);
    table.with(Style::rounded());

    let net: Money = transactions.iter().map(Transaction::signed_amount).sum();
    format!(
        "{}\n{} transaction(s), net {}\n",
        table,
        transactions.len(),
        net.format_with_symbol(symbol)
    )
}

/// Format a short transaction summary (one line)
pub fn format_transaction_short(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} {} {:<16} {:>12}",
        txn.date.format("%Y-%m-%d"),
        txn.kind,
        truncate(&txn.category.name, 16),
        txn.signed_amount().format_with_symbol(symbol)
    )
}
