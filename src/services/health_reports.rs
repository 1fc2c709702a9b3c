// ABOUTME: Report service computing periods, fetching records and running the health analyzer
// ABOUTME: Maps every fetch or assembly failure to a single unavailable error, never a partial report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rayon::prelude::*;
use serde_json::json;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use vitality_core::errors::{AppError, AppResult};
use vitality_core::models::{HealthReport, Period};
use vitality_core::store::{HealthRecordSource, ReportStore};
use vitality_intelligence::{HealthAnalyzer, HealthRecords, HealthScoringConfig};

use crate::logging::AppLogger;

/// Generates health reports from a record source and a report store
#[derive(Clone)]
pub struct ReportService {
    records: Arc<dyn HealthRecordSource>,
    reports: Arc<dyn ReportStore>,
    config: Arc<HealthScoringConfig>,
}

impl ReportService {
    /// Create a service over the given collaborators
    #[must_use]
    pub fn new(
        records: Arc<dyn HealthRecordSource>,
        reports: Arc<dyn ReportStore>,
        config: HealthScoringConfig,
    ) -> Self {
        Self {
            records,
            reports,
            config: Arc::new(config),
        }
    }

    /// Scoring configuration in use
    #[must_use]
    pub fn config(&self) -> &HealthScoringConfig {
        &self.config
    }

    /// Report for the `period_days`-long period ending today (UTC)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero-length period and `ReportUnavailable`
    /// if the records cannot be fetched or the report cannot be assembled
    pub fn generate_report(&self, user_id: Uuid, period_days: u32) -> AppResult<HealthReport> {
        self.generate_report_as_of(user_id, period_days, Utc::now().date_naive())
    }

    /// Report for the `period_days`-long period ending on `today`
    ///
    /// A failing previous-report lookup is logged and the trend falls back
    /// to the absolute score.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero-length period and `ReportUnavailable`
    /// if the records cannot be fetched or the report cannot be assembled
    #[instrument(skip(self), fields(user.id = %user_id, report.period_days = period_days))]
    pub fn generate_report_as_of(
        &self,
        user_id: Uuid,
        period_days: u32,
        today: NaiveDate,
    ) -> AppResult<HealthReport> {
        let started = Instant::now();
        let period = Period::ending_on(today, period_days).map_err(|e| e.with_user_id(user_id))?;
        let records = self.fetch_records(user_id, period)?;

        let analyzer = HealthAnalyzer::new(user_id, period, &records, &self.config);
        let report = analyzer.generate_comprehensive_report(self.reports.as_ref())?;

        AppLogger::log_report_generated(
            user_id,
            period_days,
            report.overall_score,
            report.health_grade,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(report)
    }

    /// Generate a report and store it for later trend comparison
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::generate_report_as_of`], or `StorageError`
    /// if the report cannot be persisted
    pub fn generate_and_store_report(
        &self,
        user_id: Uuid,
        period_days: u32,
        today: NaiveDate,
    ) -> AppResult<HealthReport> {
        let report = self.generate_report_as_of(user_id, period_days, today)?;
        if let Err(e) = self.reports.save_report(&report) {
            AppLogger::log_store_operation("save_report", user_id, false, 1);
            return Err(AppError::storage(format!("Failed to save health report: {e}"))
                .with_user_id(user_id)
                .with_source(e));
        }
        AppLogger::log_store_operation("save_report", user_id, true, 1);
        Ok(report)
    }

    /// Reports for many users, evaluated in parallel
    ///
    /// Results are returned in the order of `user_ids`. One user's failure
    /// does not affect the others.
    #[must_use]
    pub fn generate_reports_for_users(
        &self,
        user_ids: &[Uuid],
        period_days: u32,
        today: NaiveDate,
    ) -> Vec<(Uuid, AppResult<HealthReport>)> {
        info!(
            users = user_ids.len(),
            report.period_days = period_days,
            "Generating health reports in batch"
        );
        user_ids
            .par_iter()
            .map(|&user_id| {
                (
                    user_id,
                    self.generate_report_as_of(user_id, period_days, today),
                )
            })
            .collect()
    }

    fn fetch_records(&self, user_id: Uuid, period: Period) -> AppResult<HealthRecords> {
        let unavailable = |kind: &str, e: AppError| {
            warn!(user.id = %user_id, "Failed to fetch {kind} entries: {e}");
            AppError::report_unavailable(format!("Failed to fetch {kind} entries"))
                .with_user_id(user_id)
                .with_details(json!({
                    "record_kind": kind,
                    "period_start": period.start,
                    "period_end": period.end,
                }))
                .with_source(e)
        };

        let sleep = self
            .records
            .fetch_sleep_entries(user_id, period.start, period.end)
            .map_err(|e| unavailable("sleep", e))?;
        let exercise = self
            .records
            .fetch_exercise_entries(user_id, period.start, period.end)
            .map_err(|e| unavailable("exercise", e))?;
        let diet = self
            .records
            .fetch_diet_entries(user_id, period.start, period.end)
            .map_err(|e| unavailable("diet", e))?;

        AppLogger::log_store_operation(
            "fetch_records",
            user_id,
            true,
            sleep.len() + exercise.len() + diet.len(),
        );
        let records = HealthRecords::new(sleep, exercise, diet);
        if records.is_empty() {
            debug!(user.id = %user_id, "No health records in period, all scores will be zero");
        }
        Ok(records)
    }
}
