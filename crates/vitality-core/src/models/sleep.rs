// ABOUTME: Sleep log entry model with cross-midnight duration derivation
// ABOUTME: Bedtime and wake time are time-of-day values anchored to the sleep date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::units::{MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// One night of sleep as logged by the user
///
/// Times are stored without a date. When the wake time is earlier than the
/// bedtime the wake time belongs to the next calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepEntry {
    /// Date the night is attributed to
    pub date: NaiveDate,
    /// Time the user went to bed
    pub bedtime: NaiveTime,
    /// Time the user woke up
    pub wake_time: NaiveTime,
}

impl SleepEntry {
    /// Create a sleep entry
    #[must_use]
    pub const fn new(date: NaiveDate, bedtime: NaiveTime, wake_time: NaiveTime) -> Self {
        Self {
            date,
            bedtime,
            wake_time,
        }
    }

    /// Bedtime as minutes since midnight
    #[must_use]
    pub fn bedtime_minutes(&self) -> u32 {
        minutes_of_day(self.bedtime)
    }

    /// Wake time as minutes since midnight
    #[must_use]
    pub fn wake_minutes(&self) -> u32 {
        minutes_of_day(self.wake_time)
    }

    /// Sleep duration in minutes
    ///
    /// Returns `None` when bedtime and wake time coincide, which leaves the
    /// duration unknown rather than zero.
    #[must_use]
    pub fn duration_minutes(&self) -> Option<u32> {
        let bed = self.bedtime_minutes();
        let wake = self.wake_minutes();
        let minutes = if wake >= bed {
            wake - bed
        } else {
            wake + MINUTES_PER_DAY - bed
        };
        (minutes > 0).then_some(minutes)
    }

    /// Sleep duration in hours
    #[must_use]
    pub fn duration_hours(&self) -> Option<f64> {
        self.duration_minutes()
            .map(|minutes| f64::from(minutes) / MINUTES_PER_HOUR)
    }
}

fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
