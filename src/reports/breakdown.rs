//! Category Breakdown Report
//!
//! Per-category totals for a date window, with each slice's share of its
//! type's total and the window's income, expense and net figures.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::aggregation::{
    aggregate_by_category, filter_by_range, filter_by_type_filter, net_balance, share_of_total,
    to_pie_chart_data, total_expenses, total_income, total_of_type, PieChartDatum, TypeFilter,
};
use crate::display::report::{format_bar, format_percentage, percent_to_hundredths, separator};
use crate::error::FintrackResult;
use crate::models::{DateRange, Money, Transaction, TransactionType};

const BAR_WIDTH: usize = 20;

/// One category slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    #[serde(flatten)]
    pub datum: PieChartDatum,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub transaction_count: usize,
    /// Share of the total for this slice's type, in percent
    pub share_percent: Option<f64>,
}

/// Category Breakdown Report
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdownReport {
    pub range: DateRange,
    pub filter: TypeFilter,
    /// Slices in first-seen order
    pub slices: Vec<BreakdownSlice>,
    /// Totals over the whole window, independent of the type filter
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_balance: Money,
    /// Transactions that made it through both filters
    pub transaction_count: usize,
}

impl CategoryBreakdownReport {
    /// Generate a breakdown for `range`, keeping only `filter`'s types in the
    /// slices.
    pub fn generate(transactions: &[Transaction], range: DateRange, filter: TypeFilter) -> Self {
        let in_range = filter_by_range(transactions, range);
        let selected = filter_by_type_filter(&in_range, filter);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for txn in &selected {
            *counts.entry(txn.category.name.as_str()).or_default() += 1;
        }

        let totals = aggregate_by_category(&selected);
        let slices = totals
            .iter()
            .zip(to_pie_chart_data(&totals))
            .map(|(bucket, datum)| BreakdownSlice {
                kind: bucket.kind,
                transaction_count: counts.get(datum.name.as_str()).copied().unwrap_or(0),
                share_percent: share_of_total(datum.amount, total_of_type(&selected, bucket.kind)),
                datum,
            })
            .collect();

        tracing::debug!(
            range = %range,
            filter = %filter,
            in_range = in_range.len(),
            selected = selected.len(),
            categories = totals.len(),
            "generated category breakdown"
        );

        Self {
            range,
            filter,
            slices,
            total_income: total_income(&in_range),
            total_expenses: total_expenses(&in_range),
            net_balance: net_balance(&in_range),
            transaction_count: selected.len(),
        }
    }

    /// Slices of one type, in report order
    pub fn slices_of(&self, kind: TransactionType) -> impl Iterator<Item = &BreakdownSlice> {
        self.slices.iter().filter(move |s| s.kind == kind)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Category Breakdown: {} ({})\n",
            self.range.label(),
            self.range
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:   {:>14}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses: {:>14}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net Balance:    {:>14}\n",
            self.net_balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Transactions:   {:>14}\n", self.transaction_count));

        if self.slices.is_empty() {
            output.push_str("\nNo transactions in this range.\n");
            return output;
        }

        for kind in TransactionType::all() {
            let slices: Vec<&BreakdownSlice> = self.slices_of(*kind).collect();
            if slices.is_empty() {
                continue;
            }

            output.push_str(&format!("\n{}\n", kind.as_str().to_uppercase()));
            output.push_str(&separator(72));
            output.push('\n');

            for slice in slices {
                let share = slice.share_percent.unwrap_or(0.0);
                output.push_str(&format!(
                    "{:<3} {:<20} {:>12} {:>4} {:>8} {}\n",
                    slice.datum.short_name,
                    slice.datum.name,
                    slice.datum.amount.format_with_symbol(symbol),
                    slice.transaction_count,
                    format_percentage(slice.share_percent.map(percent_to_hundredths)),
                    format_bar(share, 100.0, BAR_WIDTH)
                ));
            }
        }

        output
    }

    /// Export the slices to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Start Date",
            "End Date",
            "Type",
            "Category",
            "Short Name",
            "Color",
            "Amount",
            "Transaction Count",
            "Share",
        ])?;

        let start = self.range.start.to_string();
        let end = self.range.end.to_string();
        for slice in &self.slices {
            let amount = slice.datum.amount.format_with_symbol("");
            let count = slice.transaction_count.to_string();
            let share = slice
                .share_percent
                .map(|pct| format!("{:.2}", pct))
                .unwrap_or_default();

            csv.write_record([
                start.as_str(),
                end.as_str(),
                slice.kind.as_str(),
                slice.datum.name.as_str(),
                slice.datum.short_name.as_str(),
                slice.datum.color.as_str(),
                amount.as_str(),
                count.as_str(),
                share.as_str(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: u64, cents: i64, kind: TransactionType, name: &str, on: NaiveDate) -> Transaction {
        Transaction::new(id, Money::from_cents(cents), kind, Category::new(name, "#123456", "*"), on)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, 2550, TransactionType::Expense, "Food", date(2025, 7, 28)),
            txn(2, 3520, TransactionType::Expense, "Food", date(2025, 7, 27)),
            txn(3, 350000, TransactionType::Income, "Salary", date(2025, 7, 25)),
            txn(4, 1450, TransactionType::Expense, "Transportation", date(2025, 7, 26)),
            txn(5, 9999, TransactionType::Expense, "Shopping", date(2025, 6, 30)),
        ]
    }

    fn july_window() -> DateRange {
        DateRange::new(date(2025, 7, 25), date(2025, 7, 28))
    }

    #[test]
    fn test_generate_breakdown() {
        let report = CategoryBreakdownReport::generate(&sample(), july_window(), TypeFilter::All);

        assert_eq!(report.transaction_count, 4);
        assert_eq!(report.total_expenses.cents(), 7520);
        assert_eq!(report.total_income.cents(), 350000);
        assert_eq!(report.net_balance.cents(), 342480);

        let names: Vec<&str> = report.slices.iter().map(|s| s.datum.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Salary", "Transportation"]);

        let food = &report.slices[0];
        assert_eq!(food.transaction_count, 2);
        assert_eq!(food.datum.amount.cents(), 6070);
        // 60.70 of 75.20 expenses
        assert!((food.share_percent.unwrap() - 6070.0 / 7520.0 * 100.0).abs() < 1e-9);

        let salary = &report.slices[1];
        assert_eq!(salary.share_percent, Some(100.0));
    }

    #[test]
    fn test_type_filter_keeps_window_totals() {
        let report =
            CategoryBreakdownReport::generate(&sample(), july_window(), TypeFilter::Expense);

        assert_eq!(report.slices.len(), 2);
        assert!(report.slices.iter().all(|s| s.kind == TransactionType::Expense));
        assert_eq!(report.transaction_count, 3);
        assert_eq!(report.total_income.cents(), 350000);
    }

    #[test]
    fn test_empty_window() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        let report = CategoryBreakdownReport::generate(&sample(), range, TypeFilter::All);

        assert!(report.slices.is_empty());
        assert!(report.net_balance.is_zero());
        assert!(report.format_terminal("$").contains("No transactions in this range."));
    }

    #[test]
    fn test_format_terminal() {
        let report = CategoryBreakdownReport::generate(&sample(), july_window(), TypeFilter::All);
        let output = report.format_terminal("$");

        assert!(output.contains("Category Breakdown: Jul 25 - Jul 28"));
        assert!(output.contains("Net Balance:"));
        assert!(output.contains("$3424.80"));
        assert!(output.contains("EXPENSE"));
        assert!(output.contains("INCOME"));
        assert!(output.contains("100.00%"));
    }

    #[test]
    fn test_export_csv() {
        let report = CategoryBreakdownReport::generate(&sample(), july_window(), TypeFilter::All);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Start Date,End Date,Type,Category"));
        assert!(lines[1].starts_with("2025-07-25,2025-07-28,expense,Food,FOO,"));
        assert!(lines[1].contains(",60.70,2,"));
        assert!(lines[2].ends_with(",3500.00,1,100.00"));
    }
}
