// ABOUTME: Sleep scoring from nightly durations and bedtime/wake time regularity
// ABOUTME: Duration, regularity and quality components combined with configured weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use vitality_core::models::SleepEntry;

use super::HealthAnalyzer;
use crate::statistics::{clamp_score, mean, sample_variance, truncate_score, weighted_sum};

impl HealthAnalyzer<'_> {
    /// Sleep score (0-100), 0 without sleep entries
    #[must_use]
    pub fn calculate_sleep_score(&self) -> u8 {
        truncate_score(self.raw_sleep_score())
    }

    pub(super) fn raw_sleep_score(&self) -> f64 {
        if self.records.sleep.is_empty() {
            return 0.0;
        }
        let weights = &self.config.sleep;
        weighted_sum(&[
            (
                clamp_score(self.sleep_duration_score()),
                weights.duration_weight,
            ),
            (
                clamp_score(self.sleep_regularity_score()),
                weights.regularity_weight,
            ),
            (
                clamp_score(self.sleep_quality_score()),
                weights.quality_weight,
            ),
        ])
    }

    /// Nightly durations in hours, skipping entries without a known duration
    pub(super) fn sleep_hours(&self) -> Vec<f64> {
        self.records
            .sleep
            .iter()
            .filter_map(SleepEntry::duration_hours)
            .collect()
    }

    /// Mean nightly sleep in hours over entries with a known duration
    pub(super) fn average_sleep_hours(&self) -> Option<f64> {
        mean(&self.sleep_hours())
    }

    /// 100 inside the ideal window, minus a penalty per hour outside it
    #[must_use]
    pub fn sleep_duration_score(&self) -> f64 {
        let Some(avg_hours) = self.average_sleep_hours() else {
            return 0.0;
        };
        let config = &self.config.sleep;
        if config.is_ideal_duration(avg_hours) {
            return 100.0;
        }
        let deviation = (avg_hours - config.ideal_min_hours)
            .abs()
            .min((avg_hours - config.ideal_max_hours).abs());
        (100.0 - deviation * config.duration_penalty_per_hour).max(0.0)
    }

    /// Average of bedtime and wake time consistency scores
    ///
    /// Each side scores `100 - variance / 60`, floored; too few nights give a
    /// flat insufficient-data score.
    #[must_use]
    pub fn sleep_regularity_score(&self) -> f64 {
        let config = &self.config.sleep;
        let entries = &self.records.sleep;
        if entries.len() < config.min_entries_for_regularity {
            return config.insufficient_data_regularity;
        }

        let bedtimes: Vec<f64> = entries
            .iter()
            .map(|e| f64::from(e.bedtime_minutes()))
            .collect();
        let wake_times: Vec<f64> = entries
            .iter()
            .map(|e| f64::from(e.wake_minutes()))
            .collect();

        let consistency = |values: &[f64]| {
            let variance = sample_variance(values).unwrap_or(0.0);
            (100.0 - variance / config.variance_per_point).max(config.regularity_floor)
        };

        (consistency(&bedtimes) + consistency(&wake_times)) / 2.0
    }

    /// Share of ideal-length nights plus a continuity bonus, capped at 100
    #[must_use]
    pub fn sleep_quality_score(&self) -> f64 {
        let entries = &self.records.sleep;
        if entries.is_empty() {
            return 0.0;
        }
        let config = &self.config.sleep;
        let ideal_nights = entries
            .iter()
            .filter_map(SleepEntry::duration_hours)
            .filter(|hours| config.is_ideal_duration(*hours))
            .count();

        let base = ideal_nights as f64 / entries.len() as f64 * 100.0;
        let bonus = (entries.len() as f64 * config.continuity_bonus_per_entry)
            .min(config.max_continuity_bonus);
        (base + bonus).min(100.0)
    }
}
