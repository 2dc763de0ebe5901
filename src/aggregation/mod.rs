//! Aggregation engine
//!
//! Pure functions that turn a transaction list into the figures the reports
//! show: filtered subsets, per-category totals, chart data, grand totals and
//! budget comparisons. Nothing here touches storage or the terminal, and
//! every function is deterministic for a given input.

pub mod budget_comparison;
pub mod budget_summary;
pub mod category_totals;
pub mod consistency;
pub mod filter;
pub mod totals;

pub use budget_comparison::{
    compare_to_budget, compare_to_budget_with, BudgetComparisonRow, BudgetJoin, BudgetStatus,
};
pub use budget_summary::{budgets_for_period, BudgetSummary, TypeSummary};
pub use category_totals::{
    aggregate_by_category, share_of_total, to_pie_chart_data, CategoryTotal, CategoryTotals,
    PieChartDatum,
};
pub use consistency::{find_category_conflicts, CategoryConflict, ConflictKind};
pub use filter::{
    filter_by_date_range, filter_by_range, filter_by_type, filter_by_type_filter, TypeFilter,
};
pub use totals::{
    format_currency, net_balance, total, total_expenses, total_income, total_of_type,
};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::models::{
        BudgetPeriod, Category, CategoryBudget, Money, Transaction, TransactionType,
    };

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A category with fixed metadata per name
    pub fn category(name: &str) -> Category {
        let (color, icon, short) = match name {
            "Food" => ("#FF6B6B", "🍽️", "FOD"),
            "Transportation" => ("#4ECDC4", "🚗", "TRN"),
            "Shopping" => ("#45B7D1", "🛒", "SHP"),
            "Health" => ("#E74C3C", "🏥", "HTH"),
            "Salary" => ("#27AE60", "💰", "SAL"),
            "Freelance" => ("#2ECC71", "💻", "FRL"),
            _ => return Category::new(name, "#888888", "•"),
        };
        Category::new(name, color, icon).with_short_name(short)
    }

    pub fn expense(id: u64, cents: i64, name: &str, on: NaiveDate) -> Transaction {
        Transaction::new(
            id,
            Money::from_cents(cents),
            TransactionType::Expense,
            category(name),
            on,
        )
    }

    pub fn income(id: u64, cents: i64, name: &str, on: NaiveDate) -> Transaction {
        Transaction::new(
            id,
            Money::from_cents(cents),
            TransactionType::Income,
            category(name),
            on,
        )
    }

    /// Two Food expenses and a Salary income in late July 2025
    pub fn scenario() -> Vec<Transaction> {
        vec![
            expense(1, 2550, "Food", date(2025, 7, 28)),
            expense(2, 3520, "Food", date(2025, 7, 27)),
            income(3, 350000, "Salary", date(2025, 7, 25)),
        ]
    }

    /// A budget valid from July through December 2025
    pub fn budget(
        id: u64,
        name: &str,
        cents: i64,
        period: BudgetPeriod,
        kind: TransactionType,
    ) -> CategoryBudget {
        CategoryBudget::new(
            id,
            category(name),
            Money::from_cents(cents),
            period,
            kind,
            date(2025, 7, 1),
            date(2025, 12, 31),
        )
    }
}
