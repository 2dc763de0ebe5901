//! Inclusive calendar date windows

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive `[start, end]` window of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Just the given day
    pub fn today(today: NaiveDate) -> Self {
        Self::new(today, today)
    }

    /// The seven days before `today`, plus today
    pub fn last_week(today: NaiveDate) -> Self {
        Self::new(today - Duration::days(7), today)
    }

    /// The thirty days before `today`, plus today
    pub fn last_month(today: NaiveDate) -> Self {
        Self::new(today - Duration::days(30), today)
    }

    /// A window whose start lies after its end; it contains no dates.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Short label such as "Jul 25 - Jul 28"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %-d"),
            self.end.format("%b %-d")
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
