//! Budgeted-versus-actual totals per transaction type

use serde::{Deserialize, Serialize};

use super::totals::total_of_type;
use crate::models::{BudgetPeriod, CategoryBudget, Money, Transaction, TransactionType};

/// Budgets whose period matches `period`
pub fn budgets_for_period(budgets: &[CategoryBudget], period: BudgetPeriod) -> Vec<CategoryBudget> {
    budgets
        .iter()
        .filter(|budget| budget.period == period)
        .cloned()
        .collect()
}

/// Budgeted and actual totals for one transaction type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeSummary {
    pub budgeted: Money,
    pub actual: Money,
}

impl TypeSummary {
    /// Actual as a percentage of budgeted, `None` when nothing is budgeted
    pub fn percent_of_target(&self) -> Option<f64> {
        self.budgeted
            .is_positive()
            .then(|| self.actual.cents() as f64 / self.budgeted.cents() as f64 * 100.0)
    }
}

/// Income and expense summary cards for one budget period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub period: BudgetPeriod,
    pub income: TypeSummary,
    pub expenses: TypeSummary,
}

impl BudgetSummary {
    /// Sum the budgets of `period` and the actual transactions per type
    pub fn compute(
        transactions: &[Transaction],
        budgets: &[CategoryBudget],
        period: BudgetPeriod,
    ) -> Self {
        let in_period = budgets_for_period(budgets, period);
        let budgeted = |kind: TransactionType| -> Money {
            in_period
                .iter()
                .filter(|b| b.kind == kind)
                .map(|b| b.budget_amount)
                .sum()
        };

        Self {
            period,
            income: TypeSummary {
                budgeted: budgeted(TransactionType::Income),
                actual: total_of_type(transactions, TransactionType::Income),
            },
            expenses: TypeSummary {
                budgeted: budgeted(TransactionType::Expense),
                actual: total_of_type(transactions, TransactionType::Expense),
            },
        }
    }

    pub fn for_type(&self, kind: TransactionType) -> &TypeSummary {
        match kind {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expenses,
        }
    }
}
