//! Budget period representation
//!
//! A budget targets a recurring calendar period. The period also provides
//! the default reporting window around a given day.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::date_range::DateRange;

/// Recurrence of a budget target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BudgetPeriod {
    /// All periods, shortest first
    pub fn all() -> &'static [Self] {
        &[Self::Weekly, Self::Monthly, Self::Quarterly, Self::Yearly]
    }

    /// Lowercase label used in files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// The calendar window of this period that contains `date`
    ///
    /// Weeks run Monday through Sunday; quarters start in January, April,
    /// July and October.
    pub fn range_containing(&self, date: NaiveDate) -> DateRange {
        match self {
            Self::Weekly => {
                let start =
                    date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
                DateRange::new(start, start + Duration::days(6))
            }
            Self::Monthly => months_from(date, date.month(), 1),
            Self::Quarterly => {
                let first_month = (date.month0() / 3) * 3 + 1;
                months_from(date, first_month, 3)
            }
            Self::Yearly => months_from(date, 1, 12),
        }
    }

    /// Parse a period name (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "quarterly" | "quarter" => Ok(Self::Quarterly),
            "yearly" | "year" | "annual" => Ok(Self::Yearly),
            _ => Err(PeriodParseError::InvalidFormat(s.trim().to_string())),
        }
    }
}

/// Window of `count` calendar months starting at `first_month` of `date`'s year
fn months_from(date: NaiveDate, first_month: u32, count: u32) -> DateRange {
    let start = NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap_or(date);
    let end = start
        .checked_add_months(Months::new(count))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    DateRange::new(start, end)
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(
                f,
                "Invalid period: {}. Use weekly, monthly, quarterly or yearly",
                s
            ),
        }
    }
}

impl std::error::Error for PeriodParseError {}
