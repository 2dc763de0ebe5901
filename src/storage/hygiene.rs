//! Data-quality checks run when data files are loaded
//!
//! Nothing here rejects data. The loaders log each finding and hand the
//! records to the engine unchanged.

use std::fmt;

use crate::aggregation::{find_category_conflicts, CategoryConflict};
use crate::models::{
    BudgetId, CategoryBudget, CategoryValidationError, Transaction, TransactionId,
};

/// One data-quality finding
#[derive(Debug, Clone, PartialEq)]
pub enum HygieneWarning {
    /// A transaction whose category disagrees with an earlier one of its name
    CategoryConflict(CategoryConflict),
    /// A transaction whose category has a blank or overlong name
    InvalidTransactionCategory {
        id: TransactionId,
        error: CategoryValidationError,
    },
    /// A budget whose category has a blank or overlong name
    InvalidBudgetCategory {
        id: BudgetId,
        error: CategoryValidationError,
    },
    /// A transaction with a negative amount
    NegativeTransaction(TransactionId),
    /// A budget with a negative target
    NegativeBudget(BudgetId),
    /// Two budgets with the same category, type and period that are active
    /// on at least one common day
    DuplicateBudget { first: BudgetId, second: BudgetId },
}

impl fmt::Display for HygieneWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryConflict(conflict) => write!(f, "{}", conflict),
            Self::InvalidTransactionCategory { id, error } => {
                write!(f, "transaction {}: {}", id, error)
            }
            Self::InvalidBudgetCategory { id, error } => write!(f, "budget {}: {}", id, error),
            Self::NegativeTransaction(id) => write!(f, "transaction {} has a negative amount", id),
            Self::NegativeBudget(id) => write!(f, "budget {} has a negative amount", id),
            Self::DuplicateBudget { first, second } => write!(
                f,
                "budgets {} and {} share category, type and period on overlapping dates",
                first, second
            ),
        }
    }
}

/// Check a transaction list. Category conflicts are only reported when
/// `check_conflicts` is set.
pub fn transaction_warnings(
    transactions: &[Transaction],
    check_conflicts: bool,
) -> Vec<HygieneWarning> {
    let mut warnings: Vec<HygieneWarning> = transactions
        .iter()
        .filter_map(|txn| {
            txn.category
                .validate()
                .err()
                .map(|error| HygieneWarning::InvalidTransactionCategory { id: txn.id, error })
        })
        .collect();
    warnings.extend(
        transactions
            .iter()
            .filter(|txn| txn.amount.is_negative())
            .map(|txn| HygieneWarning::NegativeTransaction(txn.id)),
    );

    if check_conflicts {
        warnings.extend(
            find_category_conflicts(transactions)
                .into_iter()
                .map(HygieneWarning::CategoryConflict),
        );
    }

    warnings
}

/// Check a budget list
pub fn budget_warnings(budgets: &[CategoryBudget]) -> Vec<HygieneWarning> {
    let mut warnings: Vec<HygieneWarning> = budgets
        .iter()
        .filter_map(|budget| {
            budget
                .category
                .validate()
                .err()
                .map(|error| HygieneWarning::InvalidBudgetCategory { id: budget.id, error })
        })
        .collect();
    warnings.extend(
        budgets
            .iter()
            .filter(|budget| budget.budget_amount.is_negative())
            .map(|budget| HygieneWarning::NegativeBudget(budget.id)),
    );

    for (i, first) in budgets.iter().enumerate() {
        for second in &budgets[i + 1..] {
            let overlapping =
                first.start_date <= second.end_date && second.start_date <= first.end_date;
            if overlapping && first.hygiene_key() == second.hygiene_key() {
                warnings.push(HygieneWarning::DuplicateBudget {
                    first: first.id,
                    second: second.id,
                });
            }
        }
    }

    warnings
}
