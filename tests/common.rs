// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, date helpers, record builders and failing store doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `vitality`
//!
//! All fixtures live in March 2025. The reference "today" is 2025-03-07, so
//! a 7-day period covers March 1st to 7th.

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::Level;
use uuid::Uuid;
use vitality_core::errors::{AppError, AppResult};
use vitality_core::models::{
    DietEntry, ExerciseEntry, ExerciseType, HealthReport, MealType, Period, SleepEntry,
};
use vitality_core::store::{HealthRecordSource, ReportStore};
use vitality_intelligence::HealthRecords;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// March `d`, 2025
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

/// Reference "today" for fixtures
pub fn today() -> NaiveDate {
    day(7)
}

/// The 7-day period ending on [`today`]
pub fn week() -> Period {
    Period::ending_on(today(), 7).unwrap()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// A night going to bed at 23:00 and sleeping `minutes`
pub fn night(d: u32, minutes: u32) -> SleepEntry {
    let wake = time(7, 0) + Duration::minutes(i64::from(minutes) - 480);
    SleepEntry::new(day(d), time(23, 0), wake)
}

/// A food item worth exactly `kcal` (portion of `kcal` grams at 100 kcal/100g)
pub fn food(d: u32, meal: MealType, name: &str, kcal: f64) -> DietEntry {
    DietEntry::new(day(d), meal, name, kcal, 100.0)
}

/// Seven nights averaging 8.2 hours with a fixed 23:00 bedtime
pub fn healthy_sleep() -> Vec<SleepEntry> {
    [0, 15, 10, 20, 5, 25, 9]
        .into_iter()
        .zip(1..=7)
        .map(|(extra, d)| night(d, 480 + extra))
        .collect()
}

/// Four sessions of three types burning 1900 kcal on four days
pub fn healthy_exercise() -> Vec<ExerciseEntry> {
    vec![
        ExerciseEntry::new(day(1), ExerciseType::Running, 30, Some(500)),
        ExerciseEntry::new(day(3), ExerciseType::Cycling, 45, Some(450)),
        ExerciseEntry::new(day(5), ExerciseType::Yoga, 60, Some(250)),
        ExerciseEntry::new(day(6), ExerciseType::Running, 40, Some(700)),
    ]
}

/// 2000 kcal a day for seven days, split 26/38/31/5 across ten distinct foods
pub fn healthy_diet() -> Vec<DietEntry> {
    let breakfasts = ["oatmeal", "boiled egg"];
    let lunches = ["rice", "chicken breast", "tofu"];
    let dinners = ["steamed fish", "broccoli", "noodles"];
    let snacks = ["apple", "banana"];

    (1..=7_usize)
        .flat_map(|d| {
            let date = d as u32;
            [
                food(date, MealType::Breakfast, breakfasts[d % 2], 520.0),
                food(date, MealType::Lunch, lunches[d % 3], 760.0),
                food(date, MealType::Dinner, dinners[d % 3], 620.0),
                food(date, MealType::Snack, snacks[d % 2], 100.0),
            ]
        })
        .collect()
}

/// A full healthy week
pub fn healthy_records() -> HealthRecords {
    HealthRecords::new(healthy_sleep(), healthy_exercise(), healthy_diet())
}

/// Report store that has never seen a report
pub struct EmptyReportStore;

impl ReportStore for EmptyReportStore {
    fn fetch_report_for_period(
        &self,
        _user_id: Uuid,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Option<HealthReport>> {
        Ok(None)
    }

    fn save_report(&self, _report: &HealthReport) -> AppResult<()> {
        Ok(())
    }
}

/// Report store whose backend is down
pub struct UnavailableReportStore;

impl ReportStore for UnavailableReportStore {
    fn fetch_report_for_period(
        &self,
        _user_id: Uuid,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Option<HealthReport>> {
        Err(AppError::unavailable("report database offline"))
    }

    fn save_report(&self, _report: &HealthReport) -> AppResult<()> {
        Err(AppError::unavailable("report database offline"))
    }
}

/// Record source whose backend is down
pub struct UnavailableRecordSource;

impl HealthRecordSource for UnavailableRecordSource {
    fn fetch_sleep_entries(
        &self,
        _user_id: Uuid,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Vec<SleepEntry>> {
        Ok(Vec::new())
    }

    fn fetch_exercise_entries(
        &self,
        _user_id: Uuid,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Vec<ExerciseEntry>> {
        Err(AppError::unavailable("exercise database offline"))
    }

    fn fetch_diet_entries(
        &self,
        _user_id: Uuid,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Vec<DietEntry>> {
        Ok(Vec::new())
    }
}
