// ABOUTME: Aggregate statistics over a single record collection, independent of scoring
// ABOUTME: Sleep totals and extremes, exercise totals, averages and per-type distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Record statistics
//!
//! Plain aggregates for history views. Unlike the analyzer these do not
//! depend on a period and never produce scores.

use serde::{Deserialize, Serialize};
use vitality_core::models::{ExerciseEntry, ExerciseType, ExerciseTypeBreakdown, SleepEntry};

use crate::statistics::{first_mode, round_one_decimal};

/// Totals and extremes over sleep entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepStatistics {
    /// Number of entries
    pub total_records: usize,
    /// Sum of known durations in hours, one decimal
    pub total_sleep_hours: f64,
    /// Mean known duration in hours, one decimal
    pub avg_sleep_hours: f64,
    /// Longest night in hours
    pub longest_sleep_hours: Option<f64>,
    /// Shortest night in hours
    pub shortest_sleep_hours: Option<f64>,
}

impl SleepStatistics {
    /// Aggregate `entries`, ignoring entries without a known duration
    #[must_use]
    pub fn from_entries(entries: &[SleepEntry]) -> Self {
        let hours: Vec<f64> = entries
            .iter()
            .filter_map(SleepEntry::duration_hours)
            .collect();
        let total: f64 = hours.iter().sum();
        let avg = if hours.is_empty() {
            0.0
        } else {
            total / hours.len() as f64
        };

        Self {
            total_records: entries.len(),
            total_sleep_hours: round_one_decimal(total),
            avg_sleep_hours: round_one_decimal(avg),
            longest_sleep_hours: hours.iter().copied().reduce(f64::max),
            shortest_sleep_hours: hours.iter().copied().reduce(f64::min),
        }
    }
}

/// Totals, averages and type distribution over exercise entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseStatistics {
    /// Number of sessions
    pub total_records: usize,
    /// Sum of session minutes
    pub total_minutes: u32,
    /// Sum of calories burned
    pub total_calories: u32,
    /// Mean session length in minutes, one decimal
    pub avg_minutes: f64,
    /// Mean calories per session, one decimal
    pub avg_calories: f64,
    /// Per-type totals in first-encountered order
    pub type_distribution: Vec<ExerciseTypeBreakdown>,
    /// Most frequent type, first encountered wins ties
    pub most_frequent_type: Option<ExerciseType>,
}

impl ExerciseStatistics {
    /// Aggregate `entries`, estimating missing calories at `body_weight_kg`
    #[must_use]
    pub fn from_entries(entries: &[ExerciseEntry], body_weight_kg: f64) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let mut total_minutes: u32 = 0;
        let mut total_calories: u32 = 0;
        let mut type_distribution: Vec<ExerciseTypeBreakdown> = Vec::new();

        for entry in entries {
            let calories = entry.resolved_calories(body_weight_kg);
            total_minutes = total_minutes.saturating_add(entry.duration_minutes);
            total_calories = total_calories.saturating_add(calories);

            match type_distribution
                .iter_mut()
                .find(|b| b.exercise_type == entry.exercise_type)
            {
                Some(breakdown) => {
                    breakdown.sessions += 1;
                    breakdown.total_minutes =
                        breakdown.total_minutes.saturating_add(entry.duration_minutes);
                    breakdown.total_calories = breakdown.total_calories.saturating_add(calories);
                }
                None => type_distribution.push(ExerciseTypeBreakdown {
                    exercise_type: entry.exercise_type,
                    sessions: 1,
                    total_minutes: entry.duration_minutes,
                    total_calories: calories,
                }),
            }
        }

        let sessions = entries.len() as f64;
        Self {
            total_records: entries.len(),
            total_minutes,
            total_calories,
            avg_minutes: round_one_decimal(f64::from(total_minutes) / sessions),
            avg_calories: round_one_decimal(f64::from(total_calories) / sessions),
            type_distribution,
            most_frequent_type: first_mode(entries.iter().map(|e| e.exercise_type)),
        }
    }
}
