// ABOUTME: Exercise scoring from active days, calories burned and exercise type variety
// ABOUTME: Frequency, intensity and variety components scaled to the period length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use std::collections::BTreeSet;

use chrono::NaiveDate;
use vitality_core::constants::units::DAYS_PER_WEEK;
use vitality_core::models::ExerciseType;

use super::HealthAnalyzer;
use crate::statistics::{clamp_score, truncate_score, weighted_sum};

impl HealthAnalyzer<'_> {
    /// Exercise score (0-100), 0 without exercise entries
    #[must_use]
    pub fn calculate_exercise_score(&self) -> u8 {
        truncate_score(self.raw_exercise_score())
    }

    pub(super) fn raw_exercise_score(&self) -> f64 {
        if self.records.exercise.is_empty() {
            return 0.0;
        }
        let weights = &self.config.exercise;
        weighted_sum(&[
            (
                clamp_score(self.exercise_frequency_score()),
                weights.frequency_weight,
            ),
            (
                clamp_score(self.exercise_intensity_score()),
                weights.intensity_weight,
            ),
            (
                clamp_score(self.exercise_variety_score()),
                weights.variety_weight,
            ),
        ])
    }

    /// Distinct dates with at least one session
    pub(super) fn exercise_day_count(&self) -> usize {
        self.records
            .exercise
            .iter()
            .map(|e| e.date)
            .collect::<BTreeSet<NaiveDate>>()
            .len()
    }

    /// Total calories burned, estimated from MET values where none were logged
    pub(super) fn total_calories_burned(&self) -> u32 {
        let weight = self.config.estimation.body_weight_kg;
        self.records
            .exercise
            .iter()
            .map(|e| e.resolved_calories(weight))
            .fold(0, u32::saturating_add)
    }

    /// Active days against the ideal count for the period, capped at 100
    #[must_use]
    pub fn exercise_frequency_score(&self) -> f64 {
        let config = &self.config.exercise;
        let ideal_days = (self.period.days_f64() / DAYS_PER_WEEK * config.ideal_days_per_week)
            .min(config.max_ideal_days);
        let ratio = self.exercise_day_count() as f64 / ideal_days;
        if ratio >= 1.0 {
            100.0
        } else {
            ratio * 100.0
        }
    }

    /// 100 within the tolerance band around the calorie target, minus a
    /// penalty per calorie off target otherwise
    #[must_use]
    pub fn exercise_intensity_score(&self) -> f64 {
        let config = &self.config.exercise;
        let target = config.weekly_calorie_target * (self.period.days_f64() / DAYS_PER_WEEK);
        let total = f64::from(self.total_calories_burned());

        let lower = target * (1.0 - config.calorie_target_tolerance);
        let upper = target * (1.0 + config.calorie_target_tolerance);
        if (lower..=upper).contains(&total) {
            return 100.0;
        }
        (100.0 - (total - target).abs() / config.calories_per_point).max(0.0)
    }

    /// Points per distinct exercise type, capped at 100
    #[must_use]
    pub fn exercise_variety_score(&self) -> f64 {
        let types: BTreeSet<ExerciseType> = self
            .records
            .exercise
            .iter()
            .map(|e| e.exercise_type)
            .collect();
        (types.len() as f64 * self.config.exercise.points_per_exercise_type).min(100.0)
    }
}
