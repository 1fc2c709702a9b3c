// ABOUTME: Collaborator traits for fetching health records and persisting reports
// ABOUTME: Synchronous, thread-safe seams between the analyzer and storage backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Store collaborator traits
//!
//! The analyzer never talks to a database directly. Callers hand it records
//! fetched through [`HealthRecordSource`] and resolve trends through
//! [`ReportStore`]. Implementations must return entries already filtered to
//! the closed range `[start, end]` and ordered by date.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{DietEntry, ExerciseEntry, HealthReport, SleepEntry};

/// Read access to a user's logged records
pub trait HealthRecordSource: Send + Sync {
    /// Sleep entries for `user_id` between `start` and `end` inclusive
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    fn fetch_sleep_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SleepEntry>>;

    /// Exercise entries for `user_id` between `start` and `end` inclusive
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    fn fetch_exercise_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ExerciseEntry>>;

    /// Diet entries for `user_id` between `start` and `end` inclusive
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    fn fetch_diet_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DietEntry>>;
}

/// Persistence for generated health reports
pub trait ReportStore: Send + Sync {
    /// The stored report covering exactly `[start, end]`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    fn fetch_report_for_period(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Option<HealthReport>>;

    /// Store a report, replacing any report for the same user and period
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written
    fn save_report(&self, report: &HealthReport) -> AppResult<()>;
}
