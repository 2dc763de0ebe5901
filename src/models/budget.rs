//! Category budget model
//!
//! A budget is a target amount for one category over a recurring period,
//! valid between two dates. For expense categories it is a spending cap,
//! for income categories an earnings goal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::date_range::DateRange;
use super::ids::BudgetId;
use super::money::Money;
use super::period::BudgetPeriod;
use super::transaction::TransactionType;

/// A target amount for a category over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    /// Unique identifier
    pub id: BudgetId,

    /// The budgeted category (matched by name)
    pub category: Category,

    /// Target amount
    pub budget_amount: Money,

    /// Recurrence of the target
    pub period: BudgetPeriod,

    /// Whether this is an earnings goal or a spending cap
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// First day the budget applies
    pub start_date: NaiveDate,

    /// Last day the budget applies
    pub end_date: NaiveDate,

    /// Free-text note
    #[serde(default)]
    pub description: String,
}

impl CategoryBudget {
    /// Create a budget valid over `[start_date, end_date]`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<BudgetId>,
        category: Category,
        budget_amount: Money,
        period: BudgetPeriod,
        kind: TransactionType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            budget_amount,
            period,
            kind,
            start_date,
            end_date,
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check whether the budget's validity window covers `date`
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether the validity window shares at least one day with `range`.
    /// An inverted range overlaps nothing.
    pub fn overlaps(&self, range: &DateRange) -> bool {
        !range.is_inverted() && self.start_date <= range.end && range.start <= self.end_date
    }

    /// The key that should be unique among budgets active on the same day
    pub fn hygiene_key(&self) -> (&str, TransactionType, BudgetPeriod) {
        (self.category.name.as_str(), self.kind, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn food_budget() -> CategoryBudget {
        CategoryBudget::new(
            5,
            Category::new("Food", "#FF6B6B", "🍽️"),
            Money::from_cents(40000),
            BudgetPeriod::Monthly,
            TransactionType::Expense,
            date(2025, 7, 1),
            date(2025, 12, 31),
        )
    }

    #[test]
    fn test_is_active_on() {
        let budget = food_budget();
        assert!(budget.is_active_on(date(2025, 7, 1)));
        assert!(budget.is_active_on(date(2025, 12, 31)));
        assert!(!budget.is_active_on(date(2025, 6, 30)));
        assert!(!budget.is_active_on(date(2026, 1, 1)));
    }

    #[test]
    fn test_overlaps() {
        let budget = food_budget();
        assert!(budget.overlaps(&DateRange::new(date(2025, 6, 1), date(2025, 7, 1))));
        assert!(budget.overlaps(&DateRange::new(date(2025, 12, 31), date(2026, 1, 31))));
        assert!(!budget.overlaps(&DateRange::new(date(2026, 1, 1), date(2026, 1, 31))));
        assert!(!budget.overlaps(&DateRange::new(date(2025, 8, 1), date(2025, 7, 1))));
    }

    #[test]
    fn test_hygiene_key() {
        let budget = food_budget();
        assert_eq!(
            budget.hygiene_key(),
            ("Food", TransactionType::Expense, BudgetPeriod::Monthly)
        );
    }

    #[test]
    fn test_deserialize_fixture_shape() {
        let json = r##"{
            "id": 1,
            "category": {"name": "Salary", "color": "#27AE60", "icon": "💰", "shortName": "SAL"},
            "budgetAmount": 4000.00,
            "period": "monthly",
            "type": "income",
            "startDate": "2025-07-01",
            "endDate": "2025-12-31",
            "description": "Expected monthly salary income"
        }"##;

        let budget: CategoryBudget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.budget_amount.cents(), 400000);
        assert_eq!(budget.kind, TransactionType::Income);
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert_eq!(budget.end_date, date(2025, 12, 31));
    }
}
