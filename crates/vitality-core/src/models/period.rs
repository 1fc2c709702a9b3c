// ABOUTME: Reporting period model, a closed trailing date range of fixed length
// ABOUTME: Computes the window ending on a given day and the equal-length window before it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Closed date range `[start, end]` spanning `days` calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// Last day of the period (inclusive)
    pub end: NaiveDate,
    /// Number of days in the period
    pub days: u32,
}

impl Period {
    /// The `period_days`-long window ending on `end`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `period_days` is zero or the window would
    /// start before the earliest representable date.
    pub fn ending_on(end: NaiveDate, period_days: u32) -> AppResult<Self> {
        if period_days == 0 {
            return Err(AppError::invalid_input(
                "Period length must be at least one day",
            ));
        }
        let start = end
            .checked_sub_signed(Duration::days(i64::from(period_days) - 1))
            .ok_or_else(|| AppError::invalid_input("Period start date is out of range"))?;
        Ok(Self {
            start,
            end,
            days: period_days,
        })
    }

    /// The period of equal length immediately preceding this one
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the previous window is not representable.
    pub fn previous(&self) -> AppResult<Self> {
        let previous_end = self
            .start
            .pred_opt()
            .ok_or_else(|| AppError::invalid_input("Previous period is out of range"))?;
        Self::ending_on(previous_end, self.days)
    }

    /// Whether `date` falls inside the period
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Period length as a float, for rate calculations
    #[must_use]
    pub fn days_f64(&self) -> f64 {
        f64::from(self.days)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={} ({} days)", self.start, self.end, self.days)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn test_period_ending_on() {
        let period = Period::ending_on(date(14), 7).unwrap();
        assert_eq!(period.start, date(8));
        assert_eq!(period.end, date(14));
        assert!(period.contains(date(8)));
        assert!(period.contains(date(14)));
        assert!(!period.contains(date(7)));
    }

    #[test]
    fn test_single_day_period() {
        let period = Period::ending_on(date(14), 1).unwrap();
        assert_eq!(period.start, period.end);
    }

    #[test]
    fn test_previous_period_is_adjacent() {
        let period = Period::ending_on(date(14), 7).unwrap();
        let previous = period.previous().unwrap();
        assert_eq!(previous.start, date(1));
        assert_eq!(previous.end, date(7));
        assert_eq!(previous.days, 7);
    }

    #[test]
    fn test_zero_length_period_is_rejected() {
        assert!(Period::ending_on(date(14), 0).is_err());
    }
}
