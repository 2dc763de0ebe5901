//! Report formatting utilities for terminal output
//!
//! Percentages arrive as integer hundredths so that "15.18%" is produced
//! without a float ever being formatted.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::aggregation::{BudgetComparisonRow, BudgetStatus};
use crate::models::Money;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Render hundredths of a percent as a plain decimal ("1518" -> "15.18")
pub fn format_hundredths(hundredths: i64) -> String {
    let sign = if hundredths < 0 { "-" } else { "" };
    let magnitude = hundredths.unsigned_abs();
    format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
}

/// Format a percentage, or "N/A" when there is nothing to compare against
pub fn format_percentage(hundredths: Option<i64>) -> String {
    match hundredths {
        Some(h) => format!("{}%", format_hundredths(h)),
        None => "N/A".to_string(),
    }
}

/// Convert a float percentage to rounded hundredths
pub fn percent_to_hundredths(pct: f64) -> i64 {
    (pct * 100.0).round() as i64
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Short status label for a comparison row
pub fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::NoBudget => "-",
        BudgetStatus::WithinBudget => "✓ on track",
        BudgetStatus::OffTarget => "✗ off target",
    }
}

#[derive(Tabled)]
struct ComparisonLine {
    #[tabled(rename = "")]
    icon: String,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Render budget comparison rows as a table
pub fn format_comparison_table(rows: &[BudgetComparisonRow], symbol: &str) -> String {
    if rows.is_empty() {
        return "No categories in this range.\n".to_string();
    }

    let lines = rows.iter().map(|row| ComparisonLine {
        icon: row.icon.clone(),
        name: row.name.clone(),
        actual: row.actual_amount.format_with_symbol(symbol),
        budget: if row.has_budget() {
            row.budget_amount.format_with_symbol(symbol)
        } else {
            "-".to_string()
        },
        period: row.period.to_string(),
        percentage: format_percentage(row.percentage_hundredths()),
        status: status_label(row.status()).to_string(),
    });

    let mut table = Table::new(lines);
    table.with(Style::rounded());
    format!("{}\n", table)
}
