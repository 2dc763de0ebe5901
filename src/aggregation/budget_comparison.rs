//! Budget-vs-actual comparison
//!
//! Each chart datum is left-joined against the budget list. The default
//! join matches on category name and type only, so a weekly budget can be
//! compared against a monthly actual. [`BudgetJoin::Strict`] also requires
//! the period to match; it has to be requested explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category_totals::PieChartDatum;
use crate::models::{BudgetPeriod, CategoryBudget, Money, TransactionType};

/// How chart data is matched against budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetJoin {
    /// Match on `(category name, type)`; the period is ignored
    #[default]
    NameAndType,
    /// Match on `(category name, type, period)`
    Strict,
}

impl fmt::Display for BudgetJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameAndType => f.write_str("name_and_type"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for BudgetJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "name_and_type" => Ok(Self::NameAndType),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "Invalid budget join: {}. Use name_and_type or strict",
                other
            )),
        }
    }
}

/// Outcome of one comparison row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// No positive budget to compare against
    NoBudget,
    /// Spending at or under the cap, or earnings at or over the goal
    WithinBudget,
    /// Overspent, or earned less than the goal
    OffTarget,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoBudget => "no_budget",
            Self::WithinBudget => "within_budget",
            Self::OffTarget => "off_target",
        }
    }
}

/// A chart datum joined with its budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparisonRow {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub short_name: String,
    pub actual_amount: Money,
    /// Matched budget amount, zero when nothing matched
    pub budget_amount: Money,
    /// Matched budget's period, or the requested one when nothing matched
    pub period: BudgetPeriod,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl BudgetComparisonRow {
    /// Whether a positive budget exists for this row
    pub fn has_budget(&self) -> bool {
        self.budget_amount.is_positive()
    }

    /// `actual / budget * 100`, or `None` without a positive budget
    pub fn percentage(&self) -> Option<f64> {
        self.has_budget()
            .then(|| self.actual_amount.cents() as f64 / self.budget_amount.cents() as f64 * 100.0)
    }

    /// The percentage in hundredths of a percent, rounded half away from
    /// zero with integer arithmetic (60.70 of 400.00 gives 1518).
    pub fn percentage_hundredths(&self) -> Option<i64> {
        if !self.has_budget() {
            return None;
        }
        let numerator = i128::from(self.actual_amount.cents()) * 10_000;
        let denominator = i128::from(self.budget_amount.cents());
        let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
        let signed = if numerator < 0 { -magnitude } else { magnitude };
        i64::try_from(signed).ok()
    }

    /// Expense rows are within budget at or under the cap; income rows at
    /// or over the goal.
    pub fn is_within_budget(&self) -> bool {
        match self.kind {
            TransactionType::Expense => self.actual_amount <= self.budget_amount,
            TransactionType::Income => self.actual_amount >= self.budget_amount,
        }
    }

    pub fn status(&self) -> BudgetStatus {
        if !self.has_budget() {
            BudgetStatus::NoBudget
        } else if self.is_within_budget() {
            BudgetStatus::WithinBudget
        } else {
            BudgetStatus::OffTarget
        }
    }
}

/// Join chart data against budgets on `(category name, type)`
pub fn compare_to_budget(
    pie_chart_data: &[PieChartDatum],
    budgets: &[CategoryBudget],
    kind: TransactionType,
    period: BudgetPeriod,
) -> Vec<BudgetComparisonRow> {
    compare_to_budget_with(pie_chart_data, budgets, kind, period, BudgetJoin::NameAndType)
}

/// Join chart data against budgets using the given join mode.
///
/// The first matching budget wins. Unmatched rows get a zero budget and
/// the requested period.
pub fn compare_to_budget_with(
    pie_chart_data: &[PieChartDatum],
    budgets: &[CategoryBudget],
    kind: TransactionType,
    period: BudgetPeriod,
    join: BudgetJoin,
) -> Vec<BudgetComparisonRow> {
    pie_chart_data
        .iter()
        .map(|datum| {
            let matched = budgets.iter().find(|budget| {
                budget.category.name == datum.name
                    && budget.kind == kind
                    && (join == BudgetJoin::NameAndType || budget.period == period)
            });

            BudgetComparisonRow {
                name: datum.name.clone(),
                color: datum.color.clone(),
                icon: datum.icon.clone(),
                short_name: datum.short_name.clone(),
                actual_amount: datum.amount,
                budget_amount: matched.map(|b| b.budget_amount).unwrap_or_default(),
                period: matched.map(|b| b.period).unwrap_or(period),
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::test_support::{budget, category};

    fn datum(name: &str, cents: i64) -> PieChartDatum {
        let category = category(name);
        PieChartDatum {
            name: category.name,
            amount: Money::from_cents(cents),
            color: category.color,
            icon: category.icon,
            short_name: category.short_name,
        }
    }

    #[test]
    fn test_expense_within_budget() {
        let budgets = vec![budget(1, "Food", 40000, BudgetPeriod::Monthly, TransactionType::Expense)];
        let rows = compare_to_budget(
            &[datum("Food", 6070)],
            &budgets,
            TransactionType::Expense,
            BudgetPeriod::Monthly,
        );

        let row = &rows[0];
        assert_eq!(row.budget_amount.cents(), 40000);
        assert!(row.is_within_budget());
        assert_eq!(row.status(), BudgetStatus::WithinBudget);
        assert!((row.percentage().unwrap() - 15.175).abs() < 1e-9);
        assert_eq!(row.percentage_hundredths(), Some(1518));
    }

    #[test]
    fn test_income_under_target() {
        let budgets = vec![budget(2, "Salary", 400000, BudgetPeriod::Monthly, TransactionType::Income)];
        let rows = compare_to_budget(
            &[datum("Salary", 350000)],
            &budgets,
            TransactionType::Income,
            BudgetPeriod::Monthly,
        );

        let row = &rows[0];
        assert!(!row.is_within_budget());
        assert_eq!(row.status(), BudgetStatus::OffTarget);
        assert_eq!(row.percentage(), Some(87.5));
        assert_eq!(row.percentage_hundredths(), Some(8750));
    }

    #[test]
    fn test_unmatched_category_defaults_to_zero_budget() {
        let budgets = vec![budget(1, "Food", 40000, BudgetPeriod::Monthly, TransactionType::Expense)];
        let rows = compare_to_budget(
            &[datum("Gadgets", 19999)],
            &budgets,
            TransactionType::Expense,
            BudgetPeriod::Quarterly,
        );

        let row = &rows[0];
        assert!(row.budget_amount.is_zero());
        assert_eq!(row.period, BudgetPeriod::Quarterly);
        assert_eq!(row.percentage(), None);
        assert_eq!(row.percentage_hundredths(), None);
        assert_eq!(row.status(), BudgetStatus::NoBudget);
    }

    #[test]
    fn test_join_requires_matching_type() {
        let budgets = vec![budget(1, "Food", 40000, BudgetPeriod::Monthly, TransactionType::Income)];
        let rows = compare_to_budget(
            &[datum("Food", 6070)],
            &budgets,
            TransactionType::Expense,
            BudgetPeriod::Monthly,
        );
        assert!(rows[0].budget_amount.is_zero());
    }

    #[test]
    fn test_default_join_ignores_period() {
        let budgets = vec![budget(1, "Food", 10000, BudgetPeriod::Weekly, TransactionType::Expense)];
        let rows = compare_to_budget(
            &[datum("Food", 6070)],
            &budgets,
            TransactionType::Expense,
            BudgetPeriod::Monthly,
        );

        assert_eq!(rows[0].budget_amount.cents(), 10000);
        assert_eq!(rows[0].period, BudgetPeriod::Weekly);
    }

    #[test]
    fn test_strict_join_requires_period() {
        let budgets = vec![
            budget(1, "Food", 10000, BudgetPeriod::Weekly, TransactionType::Expense),
            budget(2, "Food", 40000, BudgetPeriod::Monthly, TransactionType::Expense),
        ];
        let data = [datum("Food", 6070)];

        let loose = compare_to_budget(&data, &budgets, TransactionType::Expense, BudgetPeriod::Monthly);
        assert_eq!(loose[0].budget_amount.cents(), 10000);

        let strict = compare_to_budget_with(
            &data,
            &budgets,
            TransactionType::Expense,
            BudgetPeriod::Monthly,
            BudgetJoin::Strict,
        );
        assert_eq!(strict[0].budget_amount.cents(), 40000);
        assert_eq!(strict[0].period, BudgetPeriod::Monthly);

        let none = compare_to_budget_with(
            &data,
            &budgets,
            TransactionType::Expense,
            BudgetPeriod::Yearly,
            BudgetJoin::Strict,
        );
        assert!(none[0].budget_amount.is_zero());
    }

    #[test]
    fn test_rows_follow_chart_order() {
        let rows = compare_to_budget(
            &[datum("Shopping", 100), datum("Food", 200)],
            &[],
            TransactionType::Expense,
            BudgetPeriod::Monthly,
        );
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Shopping", "Food"]);
        assert!(compare_to_budget(&[], &[], TransactionType::Expense, BudgetPeriod::Monthly).is_empty());
    }

    #[test]
    fn test_expense_exactly_at_budget_is_within() {
        let budgets = vec![budget(1, "Food", 6070, BudgetPeriod::Monthly, TransactionType::Expense)];
        let rows = compare_to_budget(
            &[datum("Food", 6070)],
            &budgets,
            TransactionType::Expense,
            BudgetPeriod::Monthly,
        );
        assert!(rows[0].is_within_budget());
        assert_eq!(rows[0].percentage_hundredths(), Some(10000));
    }

    #[test]
    fn test_join_parse() {
        assert_eq!("strict".parse::<BudgetJoin>().unwrap(), BudgetJoin::Strict);
        assert_eq!("name-and-type".parse::<BudgetJoin>().unwrap(), BudgetJoin::NameAndType);
        assert!("loose".parse::<BudgetJoin>().is_err());
    }
}
