//! Sample dataset written by `fintrack init`
//!
//! A month of household activity in July 2025 with monthly budgets valid
//! for the second half of the year.

use chrono::NaiveDate;

use crate::error::FintrackError;
use crate::models::{
    BudgetPeriod, Category, CategoryBudget, Money, Transaction, TransactionType,
};

use TransactionType::{Expense, Income};

/// Sample categories: name, color, icon, short name, type
const CATEGORIES: &[(&str, &str, &str, &str, TransactionType)] = &[
    ("Food", "#FF6B6B", "🍽️", "FOD", Expense),
    ("Transportation", "#4ECDC4", "🚗", "TRN", Expense),
    ("Shopping", "#45B7D1", "🛒", "SHP", Expense),
    ("Entertainment", "#96CEB4", "🎬", "ENT", Expense),
    ("Health", "#E74C3C", "🏥", "HTH", Expense),
    ("Salary", "#27AE60", "💰", "SAL", Income),
    ("Freelance", "#2ECC71", "💻", "FRL", Income),
    ("Investment", "#16A085", "📈", "INV", Income),
    ("Side Business", "#1ABC9C", "🏪", "SBZ", Income),
    ("Gift", "#58D68D", "🎁", "GFT", Income),
];

/// id, category, amount in cents, date, description
const TRANSACTIONS: &[(u64, &str, i64, &str, &str)] = &[
    (1, "Salary", 400000, "2025-07-29", "Monthly salary"),
    (2, "Freelance", 50000, "2025-07-25", "Web development project"),
    (3, "Investment", 12500, "2025-07-20", "Dividend payment"),
    (8, "Side Business", 30000, "2025-07-15", "Online store sales"),
    (13, "Gift", 5000, "2025-07-10", "Birthday gift from family"),
    (4, "Food", 3520, "2025-07-27", "Dinner"),
    (5, "Entertainment", 1500, "2025-07-26", "Movie ticket"),
    (6, "Health", 12000, "2025-07-25", "Doctor visit"),
    (7, "Shopping", 4599, "2025-07-24", "Groceries"),
    (9, "Transportation", 2500, "2025-07-23", "Gas for car"),
    (10, "Food", 2250, "2025-07-22", "Lunch"),
    (11, "Shopping", 8999, "2025-07-21", "Clothing"),
    (12, "Transportation", 1500, "2025-07-20", "Bus fare"),
];

/// id, category, monthly amount in cents, description
const BUDGETS: &[(u64, &str, i64, &str)] = &[
    (1, "Salary", 400000, "Expected monthly salary income"),
    (2, "Freelance", 60000, "Target freelance income per month"),
    (3, "Investment", 15000, "Expected investment returns"),
    (4, "Side Business", 40000, "Expected income from side business activities"),
    (5, "Gift", 5000, "Expected gift income"),
    (6, "Food", 40000, "Monthly food and dining budget"),
    (7, "Transportation", 15000, "Gas, public transport, and parking"),
    (8, "Shopping", 20000, "Clothing, household items, and miscellaneous"),
    (9, "Entertainment", 10000, "Movies, subscriptions, and leisure activities"),
    (10, "Health", 25000, "Medical expenses and health insurance"),
];

fn parse_date(s: &str) -> Result<NaiveDate, FintrackError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| FintrackError::Validation(format!("Invalid seed date '{}': {}", s, e)))
}

fn lookup(name: &str) -> Result<(Category, TransactionType), FintrackError> {
    CATEGORIES
        .iter()
        .find(|(n, ..)| *n == name)
        .map(|&(name, color, icon, short, kind)| {
            (Category::new(name, color, icon).with_short_name(short), kind)
        })
        .ok_or_else(|| FintrackError::category_not_found(name))
}

/// The sample categories with their types
pub fn sample_categories() -> Vec<(Category, TransactionType)> {
    CATEGORIES
        .iter()
        .map(|&(name, color, icon, short, kind)| {
            (Category::new(name, color, icon).with_short_name(short), kind)
        })
        .collect()
}

/// The sample transactions, income first
pub fn sample_transactions() -> Result<Vec<Transaction>, FintrackError> {
    TRANSACTIONS
        .iter()
        .map(|&(id, name, cents, date, description)| {
            let (category, kind) = lookup(name)?;
            Ok(
                Transaction::new(id, Money::from_cents(cents), kind, category, parse_date(date)?)
                    .with_description(description),
            )
        })
        .collect()
}

/// The sample monthly budgets, valid July through December 2025
pub fn sample_budgets() -> Result<Vec<CategoryBudget>, FintrackError> {
    let start = parse_date("2025-07-01")?;
    let end = parse_date("2025-12-31")?;

    BUDGETS
        .iter()
        .map(|&(id, name, cents, description)| {
            let (category, kind) = lookup(name)?;
            Ok(CategoryBudget::new(
                id,
                category,
                Money::from_cents(cents),
                BudgetPeriod::Monthly,
                kind,
                start,
                end,
            )
            .with_description(description))
        })
        .collect()
}
