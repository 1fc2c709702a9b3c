// ABOUTME: Concurrent in-memory implementation of the record source and report store traits
// ABOUTME: Per-user sharded maps returning date-filtered, date-ordered entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;
use vitality_core::errors::AppResult;
use vitality_core::models::{DietEntry, ExerciseEntry, HealthReport, SleepEntry};
use vitality_core::store::{HealthRecordSource, ReportStore};
use vitality_intelligence::HealthRecords;

/// In-memory store keyed by user
///
/// `DashMap` shards the per-user maps, so concurrent report generation for
/// different users never contends on a global lock.
#[derive(Debug, Default)]
pub struct InMemoryHealthStore {
    sleep: DashMap<Uuid, Vec<SleepEntry>>,
    exercise: DashMap<Uuid, Vec<ExerciseEntry>>,
    diet: DashMap<Uuid, Vec<DietEntry>>,
    reports: DashMap<Uuid, Vec<HealthReport>>,
}

impl InMemoryHealthStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a night of sleep
    pub fn add_sleep_entry(&self, user_id: Uuid, entry: SleepEntry) {
        self.sleep.entry(user_id).or_default().push(entry);
    }

    /// Record an exercise session
    pub fn add_exercise_entry(&self, user_id: Uuid, entry: ExerciseEntry) {
        self.exercise.entry(user_id).or_default().push(entry);
    }

    /// Record a food item
    pub fn add_diet_entry(&self, user_id: Uuid, entry: DietEntry) {
        self.diet.entry(user_id).or_default().push(entry);
    }

    /// Record every entry of `records` for `user_id`
    pub fn import_records(&self, user_id: Uuid, records: HealthRecords) {
        debug!(
            user_id = %user_id,
            sleep = records.sleep.len(),
            exercise = records.exercise.len(),
            diet = records.diet.len(),
            "Importing health records"
        );
        self.sleep.entry(user_id).or_default().extend(records.sleep);
        self.exercise
            .entry(user_id)
            .or_default()
            .extend(records.exercise);
        self.diet.entry(user_id).or_default().extend(records.diet);
    }

    /// Number of stored reports for `user_id`
    #[must_use]
    pub fn report_count(&self, user_id: Uuid) -> usize {
        self.reports.get(&user_id).map_or(0, |reports| reports.len())
    }
}

/// Entries of `user_id` dated within `[start, end]`, in date order
fn entries_in_range<T, F>(
    map: &DashMap<Uuid, Vec<T>>,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
    date_of: F,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> NaiveDate,
{
    map.get(&user_id).map_or_else(Vec::new, |entries| {
        let mut selected: Vec<T> = entries
            .iter()
            .filter(|&entry| (start..=end).contains(&date_of(entry)))
            .cloned()
            .collect();
        selected.sort_by_key(&date_of);
        selected
    })
}

impl HealthRecordSource for InMemoryHealthStore {
    fn fetch_sleep_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SleepEntry>> {
        Ok(entries_in_range(&self.sleep, user_id, start, end, |e| e.date))
    }

    fn fetch_exercise_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ExerciseEntry>> {
        Ok(entries_in_range(&self.exercise, user_id, start, end, |e| e.date))
    }

    fn fetch_diet_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DietEntry>> {
        let mut entries = entries_in_range(&self.diet, user_id, start, end, |e| e.date);
        entries.sort_by_key(|e| (e.date, e.meal_type));
        Ok(entries)
    }
}

impl ReportStore for InMemoryHealthStore {
    fn fetch_report_for_period(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Option<HealthReport>> {
        Ok(self.reports.get(&user_id).and_then(|reports| {
            reports
                .iter()
                .find(|r| r.period.start == start && r.period.end == end)
                .cloned()
        }))
    }

    fn save_report(&self, report: &HealthReport) -> AppResult<()> {
        let mut reports = self.reports.entry(report.user_id).or_default();
        reports.retain(|r| r.period != report.period);
        reports.push(report.clone());
        Ok(())
    }
}
