//! Budget Overview Report
//!
//! Actual income and spending per category for a window, joined against
//! the budgets valid in that window, plus the per-type summary cards.

use serde::Serialize;
use std::io::Write;

use crate::aggregation::{
    aggregate_by_category, budgets_for_period, compare_to_budget_with, filter_by_range,
    filter_by_type,
    to_pie_chart_data, BudgetComparisonRow, BudgetJoin, BudgetSummary, TypeSummary,
};
use crate::display::report::{
    double_separator, format_comparison_table, format_percentage, percent_to_hundredths,
};
use crate::error::FintrackResult;
use crate::models::{BudgetPeriod, CategoryBudget, DateRange, Transaction, TransactionType};

/// Budget Overview Report
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverviewReport {
    pub range: DateRange,
    pub period: BudgetPeriod,
    pub join: BudgetJoin,
    pub income_rows: Vec<BudgetComparisonRow>,
    pub expense_rows: Vec<BudgetComparisonRow>,
    pub summary: BudgetSummary,
}

impl BudgetOverviewReport {
    /// Generate the overview for `range`.
    ///
    /// Only budgets of `period` whose validity window overlaps `range` take
    /// part in the join and the summary, so a row never shows a target of
    /// another period.
    pub fn generate(
        transactions: &[Transaction],
        budgets: &[CategoryBudget],
        range: DateRange,
        period: BudgetPeriod,
        join: BudgetJoin,
    ) -> Self {
        let in_range = filter_by_range(transactions, range);
        let overlapping: Vec<CategoryBudget> = budgets
            .iter()
            .filter(|budget| budget.overlaps(&range))
            .cloned()
            .collect();
        let active = budgets_for_period(&overlapping, period);

        let rows_for = |kind: TransactionType| {
            let totals = aggregate_by_category(&filter_by_type(&in_range, kind));
            compare_to_budget_with(&to_pie_chart_data(&totals), &active, kind, period, join)
        };
        let income_rows = rows_for(TransactionType::Income);
        let expense_rows = rows_for(TransactionType::Expense);

        tracing::debug!(
            range = %range,
            %period,
            %join,
            transactions = in_range.len(),
            active_budgets = active.len(),
            "generated budget overview"
        );

        Self {
            range,
            period,
            join,
            income_rows,
            expense_rows,
            summary: BudgetSummary::compute(&in_range, &active, period),
        }
    }

    /// Comparison rows for one type
    pub fn rows(&self, kind: TransactionType) -> &[BudgetComparisonRow] {
        match kind {
            TransactionType::Income => &self.income_rows,
            TransactionType::Expense => &self.expense_rows,
        }
    }

    /// Number of rows that have a budget but missed it
    pub fn off_target_count(&self) -> usize {
        self.income_rows
            .iter()
            .chain(&self.expense_rows)
            .filter(|row| row.has_budget() && !row.is_within_budget())
            .count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Budget Overview: {} {} ({})\n",
            self.period,
            self.range.label(),
            self.range
        ));
        if self.join == BudgetJoin::Strict {
            output.push_str("Budgets matched on category, type and period\n");
        }
        output.push_str(&double_separator(72));
        output.push('\n');

        output.push_str(&summary_line("Income", &self.summary.income, symbol));
        output.push_str(&summary_line("Expenses", &self.summary.expenses, symbol));

        for kind in TransactionType::all() {
            output.push_str(&format!("\n{}\n", kind.as_str().to_uppercase()));
            output.push_str(&format_comparison_table(self.rows(*kind), symbol));
        }

        let off_target = self.off_target_count();
        if off_target > 0 {
            let noun = if off_target == 1 { "category" } else { "categories" };
            output.push_str(&format!("\n{} {} off target\n", off_target, noun));
        }

        output
    }

    /// Export the comparison rows to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Type",
            "Category",
            "Short Name",
            "Actual",
            "Budget",
            "Budget Period",
            "Percentage",
            "Status",
        ])?;

        for row in self.income_rows.iter().chain(&self.expense_rows) {
            let actual = row.actual_amount.format_with_symbol("");
            let budget = row.budget_amount.format_with_symbol("");
            let percentage = row
                .percentage_hundredths()
                .map(crate::display::report::format_hundredths)
                .unwrap_or_default();

            csv.write_record([
                row.kind.as_str(),
                row.name.as_str(),
                row.short_name.as_str(),
                actual.as_str(),
                budget.as_str(),
                row.period.as_str(),
                percentage.as_str(),
                row.status().as_str(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

fn summary_line(label: &str, summary: &TypeSummary, symbol: &str) -> String {
    format!(
        "{:<10} {:>14} of {:>14} budgeted ({} of target)\n",
        label,
        summary.actual.format_with_symbol(symbol),
        summary.budgeted.format_with_symbol(symbol),
        format_percentage(summary.percent_of_target().map(percent_to_hundredths))
    )
}
