// ABOUTME: Data summary and per-domain detailed analysis for health reports
// ABOUTME: Day counts, averages, best and worst nights, dominant exercise and meal calorie split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use std::collections::BTreeMap;

use vitality_core::models::{
    DataSummary, DetailedAnalysis, DietAnalysis, ExerciseAnalysis, MealType, SleepAnalysis,
    SleepEntry,
};

use super::HealthAnalyzer;
use crate::record_statistics::ExerciseStatistics;
use crate::statistics::{mean, round_one_decimal, truncate_score};

/// Duration assumed for entries without one when picking the worst night
const UNKNOWN_DURATION_FOR_WORST_NIGHT: u32 = 999;

impl HealthAnalyzer<'_> {
    /// Counts and averages over the period
    #[must_use]
    pub fn generate_data_summary(&self) -> DataSummary {
        DataSummary {
            sleep_days: count_u32(self.records.sleep.len()),
            exercise_days: count_u32(self.exercise_day_count()),
            diet_days: count_u32(self.diet_day_count()),
            avg_sleep_hours: self.average_sleep_hours().map_or(0.0, round_one_decimal),
            total_calories_burned: self.total_calories_burned(),
            total_exercise_minutes: self.total_exercise_minutes(),
            avg_calories_intake: self
                .average_daily_calories()
                .map_or(0, |avg| avg.max(0.0).trunc() as u32),
        }
    }

    /// Per-domain breakdowns, each present only when its collection has entries
    #[must_use]
    pub fn generate_detailed_analysis(&self) -> DetailedAnalysis {
        DetailedAnalysis {
            sleep: self.sleep_analysis(),
            exercise: self.exercise_analysis(),
            diet: self.diet_analysis(),
        }
    }

    fn total_exercise_minutes(&self) -> u32 {
        self.records
            .exercise
            .iter()
            .map(|e| e.duration_minutes)
            .fold(0, u32::saturating_add)
    }

    fn sleep_analysis(&self) -> Option<SleepAnalysis> {
        let entries = &self.records.sleep;
        let first = entries.first()?;

        // First maximum and first minimum win ties
        let mut best = first;
        let mut worst = first;
        for entry in entries {
            if entry.duration_minutes().unwrap_or(0) > best.duration_minutes().unwrap_or(0) {
                best = entry;
            }
            if worst_night_key(entry) < worst_night_key(worst) {
                worst = entry;
            }
        }

        let hours = self.sleep_hours();
        Some(SleepAnalysis {
            avg_sleep_duration: mean(&hours).map_or(0.0, round_one_decimal),
            sleep_regularity_score: truncate_score(self.sleep_regularity_score()),
            best_sleep_day: best.date,
            worst_sleep_day: worst.date,
            longest_sleep_hours: hours.iter().copied().reduce(f64::max),
            shortest_sleep_hours: hours.iter().copied().reduce(f64::min),
        })
    }

    fn exercise_analysis(&self) -> Option<ExerciseAnalysis> {
        let entries = &self.records.exercise;
        let stats =
            ExerciseStatistics::from_entries(entries, self.config.estimation.body_weight_kg);
        let dominant_exercise_type = stats.most_frequent_type?;
        let avg_calories = f64::from(stats.total_calories) / entries.len() as f64;

        Some(ExerciseAnalysis {
            total_exercise_time: stats.total_minutes,
            avg_calories_burned: avg_calories.trunc() as u32,
            exercise_frequency: count_u32(self.exercise_day_count()),
            dominant_exercise_type,
            type_distribution: stats.type_distribution,
        })
    }

    fn diet_analysis(&self) -> Option<DietAnalysis> {
        if self.records.diet.is_empty() {
            return None;
        }
        let meals = self.meal_calories();
        let total: f64 = meals.iter().map(|(_, calories)| calories).sum();

        let most_calorific_meal = meals
            .iter()
            .fold(None, |best: Option<(MealType, f64)>, &(meal, calories)| {
                match best {
                    Some((_, best_calories)) if best_calories >= calories => best,
                    _ => Some((meal, calories)),
                }
            })
            .map(|(meal, _)| meal);

        let calorie_distribution: BTreeMap<MealType, u32> = if total > 0.0 {
            meals
                .iter()
                .map(|&(meal, calories)| (meal, (calories / total * 100.0).trunc() as u32))
                .collect()
        } else {
            BTreeMap::new()
        };

        Some(DietAnalysis {
            avg_daily_calories: self
                .average_daily_calories()
                .map_or(0, |avg| avg.max(0.0).trunc() as u32),
            meal_balance_score: truncate_score(self.diet_balance_score()),
            most_calorific_meal,
            calorie_distribution,
        })
    }
}

fn worst_night_key(entry: &SleepEntry) -> u32 {
    entry
        .duration_minutes()
        .unwrap_or(UNKNOWN_DURATION_FOR_WORST_NIGHT)
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
