//! Income, expense and net-balance totals

use crate::models::{Money, Transaction, TransactionType};

/// Sum of every amount, regardless of type
pub fn total(transactions: &[Transaction]) -> Money {
    transactions.iter().map(|txn| txn.amount).sum()
}

/// Sum of income amounts
pub fn total_income(transactions: &[Transaction]) -> Money {
    total_of_type(transactions, TransactionType::Income)
}

/// Sum of expense amounts
pub fn total_expenses(transactions: &[Transaction]) -> Money {
    total_of_type(transactions, TransactionType::Expense)
}

/// Income minus expenses; negative when spending exceeds earnings
pub fn net_balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expenses(transactions)
}

/// Sum of the amounts of one type. Equivalent to
/// `total(&filter_by_type(transactions, kind))` without the copy.
pub fn total_of_type(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .map(|txn| txn.amount)
        .sum()
}

/// Format an amount as `$1234.56`, with the sign after the symbol for
/// negative amounts (`$-15.50`)
///
/// Amounts are whole cents, so formatting never rounds.
pub fn format_currency(amount: Money) -> String {
    format!("${}", amount.format_with_symbol(""))
}
