//! CLI commands for reports
//!
//! `fintrack breakdown` and `fintrack budgets`.

use chrono::NaiveDate;
use clap::Args;

use super::{parse_date, parse_optional_date, write_export, OutputArgs, QuickRange};
use crate::aggregation::{BudgetJoin, TypeFilter};
use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetPeriod, DateRange};
use crate::reports::{BudgetOverviewReport, CategoryBreakdownReport};
use crate::storage::Storage;

/// Arguments for `fintrack breakdown`
#[derive(Args, Debug, Clone)]
pub struct BreakdownArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Report on the calendar period containing the end date (or today)
    #[arg(short, long, conflicts_with_all = ["start", "last"])]
    pub period: Option<String>,

    /// Quick window ending today
    #[arg(long, value_enum, conflicts_with_all = ["start", "end"])]
    pub last: Option<QuickRange>,

    /// Only include one type: all, income or expense
    #[arg(short = 't', long = "type", default_value = "all")]
    pub type_filter: TypeFilter,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `fintrack budgets`
#[derive(Args, Debug, Clone)]
pub struct BudgetsArgs {
    /// Budget period to compare (defaults to the configured period)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Report on the period containing this date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub on: Option<String>,

    /// Only match budgets whose period equals the selected one
    #[arg(long)]
    pub strict_period: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn parse_period(value: Option<&str>, settings: &Settings) -> FintrackResult<BudgetPeriod> {
    match value {
        Some(s) => BudgetPeriod::parse(s).map_err(|e| FintrackError::Validation(e.to_string())),
        None => Ok(settings.default_period),
    }
}

/// Work out the breakdown window from the flags.
///
/// Explicit dates win; a lone start runs to today, a lone end looks back
/// thirty days. Without dates the window is a quick range or the calendar
/// period (flag or configured default) containing today.
fn resolve_breakdown_range(
    args: &BreakdownArgs,
    settings: &Settings,
    today: NaiveDate,
) -> FintrackResult<DateRange> {
    let start = parse_optional_date(args.start.as_deref(), "start")?;
    let end = parse_optional_date(args.end.as_deref(), "end")?;

    let range = match (start, end, args.last) {
        (Some(start), Some(end), _) => DateRange::new(start, end),
        (Some(start), None, _) => DateRange::new(start, today),
        (None, Some(end), None) if args.period.is_none() => DateRange::last_month(end),
        (None, _, Some(QuickRange::Today)) => DateRange::today(today),
        (None, _, Some(QuickRange::Week)) => DateRange::last_week(today),
        (None, _, Some(QuickRange::Month)) => DateRange::last_month(today),
        (None, end, None) => {
            let period = parse_period(args.period.as_deref(), settings)?;
            period.range_containing(end.unwrap_or(today))
        }
    };

    if range.is_inverted() {
        tracing::warn!(%range, "start date is after end date, nothing will match");
    }
    Ok(range)
}

/// Handle `fintrack breakdown`
pub fn handle_breakdown_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    args: BreakdownArgs,
) -> FintrackResult<()> {
    let range = resolve_breakdown_range(&args, settings, today)?;
    let transactions = storage.transactions.get_all()?;

    let report = CategoryBreakdownReport::generate(&transactions, range, args.type_filter);

    if args.output.is_terminal() {
        print!("{}", report.format_terminal(&settings.currency_symbol));
        Ok(())
    } else {
        write_export(&report, &args.output, "Category breakdown")
    }
}

/// Handle `fintrack budgets`
pub fn handle_budgets_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    args: BudgetsArgs,
) -> FintrackResult<()> {
    let period = parse_period(args.period.as_deref(), settings)?;
    let on = match args.on.as_deref() {
        Some(value) => parse_date(value, "reference")?,
        None => today,
    };
    let join = if args.strict_period {
        BudgetJoin::Strict
    } else {
        settings.budget_join
    };

    let range = period.range_containing(on);
    let transactions = storage.transactions.get_all()?;
    let budgets = storage.budgets.active_on(on)?;

    let report = BudgetOverviewReport::generate(&transactions, &budgets, range, period, join);

    if args.output.is_terminal() {
        print!("{}", report.format_terminal(&settings.currency_symbol));
        Ok(())
    } else {
        write_export(&report, &args.output, "Budget overview")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn args() -> BreakdownArgs {
        BreakdownArgs {
            start: None,
            end: None,
            period: None,
            last: None,
            type_filter: TypeFilter::All,
            output: OutputArgs::default(),
        }
    }

    fn resolve(args: BreakdownArgs) -> DateRange {
        resolve_breakdown_range(&args, &Settings::default(), date(2025, 7, 28)).unwrap()
    }

    #[test]
    fn test_explicit_dates() {
        let range = resolve(BreakdownArgs {
            start: Some("2025-07-25".into()),
            end: Some("2025-07-28".into()),
            ..args()
        });
        assert_eq!(range, DateRange::new(date(2025, 7, 25), date(2025, 7, 28)));
    }

    #[test]
    fn test_lone_dates() {
        let range = resolve(BreakdownArgs {
            start: Some("2025-07-01".into()),
            ..args()
        });
        assert_eq!(range, DateRange::new(date(2025, 7, 1), date(2025, 7, 28)));

        let range = resolve(BreakdownArgs {
            end: Some("2025-07-10".into()),
            ..args()
        });
        assert_eq!(range, DateRange::new(date(2025, 6, 10), date(2025, 7, 10)));
    }

    #[test]
    fn test_quick_ranges() {
        let week = resolve(BreakdownArgs {
            last: Some(QuickRange::Week),
            ..args()
        });
        assert_eq!(week, DateRange::new(date(2025, 7, 21), date(2025, 7, 28)));

        let today = resolve(BreakdownArgs {
            last: Some(QuickRange::Today),
            ..args()
        });
        assert_eq!(today, DateRange::today(date(2025, 7, 28)));
    }

    #[test]
    fn test_period_defaults() {
        assert_eq!(resolve(args()), DateRange::new(date(2025, 7, 1), date(2025, 7, 31)));

        let quarter = resolve(BreakdownArgs {
            period: Some("quarterly".into()),
            end: Some("2025-02-14".into()),
            ..args()
        });
        assert_eq!(quarter, DateRange::new(date(2025, 1, 1), date(2025, 3, 31)));
    }

    #[test]
    fn test_invalid_input() {
        let bad_date = BreakdownArgs {
            start: Some("July 1".into()),
            ..args()
        };
        assert!(resolve_breakdown_range(&bad_date, &Settings::default(), date(2025, 7, 28))
            .unwrap_err()
            .is_validation());

        let bad_period = BreakdownArgs {
            period: Some("fortnightly".into()),
            ..args()
        };
        assert!(resolve_breakdown_range(&bad_period, &Settings::default(), date(2025, 7, 28))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_inverted_dates_are_allowed() {
        let range = resolve(BreakdownArgs {
            start: Some("2025-07-28".into()),
            end: Some("2025-07-25".into()),
            ..args()
        });
        assert!(range.is_inverted());
    }
}
