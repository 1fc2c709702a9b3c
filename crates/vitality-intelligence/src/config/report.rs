// ABOUTME: Overall score, grade, trend and report limit configuration
// ABOUTME: Combines sub-scores, partitions the score range and caps insights and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Report Configuration
//!
//! Settings that act on the sub-scores rather than on raw records: the
//! overall weighting, grade thresholds, trend detection and the rules that
//! turn scores into insights and recommendations.

use serde::{Deserialize, Serialize};

use crate::scoring_constants::{overall, report, trend};

/// Overall score weighting and grade partition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallScoringConfig {
    /// Weight of the sleep score
    pub sleep_weight: f64,
    /// Weight of the exercise score
    pub exercise_weight: f64,
    /// Weight of the diet score
    pub diet_weight: f64,
    /// Inclusive lower bounds of each grade
    pub grade_thresholds: GradeThresholds,
}

impl Default for OverallScoringConfig {
    fn default() -> Self {
        Self {
            sleep_weight: overall::SLEEP_WEIGHT,
            exercise_weight: overall::EXERCISE_WEIGHT,
            diet_weight: overall::DIET_WEIGHT,
            grade_thresholds: GradeThresholds::default(),
        }
    }
}

/// Inclusive lower bound of each grade, scores below `d_min` are graded F
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeThresholds {
    /// Lowest A score
    pub a_min: u8,
    /// Lowest B score
    pub b_min: u8,
    /// Lowest C score
    pub c_min: u8,
    /// Lowest D score
    pub d_min: u8,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            a_min: overall::GRADE_A_MIN,
            b_min: overall::GRADE_B_MIN,
            c_min: overall::GRADE_C_MIN,
            d_min: overall::GRADE_D_MIN,
        }
    }
}

/// Trend detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Score change beyond which the trend is improving or declining
    pub score_delta: i16,
    /// Without history, scores at or above this are stable
    pub fallback_stable_min: u8,
    /// Without history, scores at or above this are improving
    pub fallback_improving_min: u8,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            score_delta: trend::SCORE_DELTA,
            fallback_stable_min: trend::FALLBACK_STABLE_MIN,
            fallback_improving_min: trend::FALLBACK_IMPROVING_MIN,
        }
    }
}

/// Report list caps and recommendation priority cut-offs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLimits {
    /// Maximum number of insights
    pub max_insights: usize,
    /// Maximum number of recommendations
    pub max_recommendations: usize,
    /// Sub-scores below this get a high priority recommendation
    pub high_priority_below: u8,
    /// Sub-scores below this get a medium priority recommendation
    pub medium_priority_below: u8,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            max_insights: report::MAX_INSIGHTS,
            max_recommendations: report::MAX_RECOMMENDATIONS,
            high_priority_below: report::HIGH_PRIORITY_BELOW,
            medium_priority_below: report::MEDIUM_PRIORITY_BELOW,
        }
    }
}

/// Thresholds that trigger natural-language insights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Average sleep at or above this is reported as well rested
    pub well_rested_hours: f64,
    /// Average sleep below this is reported as a deficit
    pub sleep_deficit_hours: f64,
    /// Sleep entries needed to praise logging consistency
    pub consistent_sleep_log_entries: usize,
    /// Exercise days meeting the ideal frequency
    pub ideal_exercise_days: usize,
    /// Exercise days considered a good frequency
    pub good_exercise_days: usize,
    /// Distinct foods indicating a varied diet
    pub rich_food_variety: usize,
    /// Distinct foods below which the diet is monotonous
    pub poor_food_variety: usize,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            well_rested_hours: report::WELL_RESTED_HOURS,
            sleep_deficit_hours: report::SLEEP_DEFICIT_HOURS,
            consistent_sleep_log_entries: report::CONSISTENT_SLEEP_LOG_ENTRIES,
            ideal_exercise_days: report::IDEAL_EXERCISE_DAYS,
            good_exercise_days: report::GOOD_EXERCISE_DAYS,
            rich_food_variety: report::RICH_FOOD_VARIETY,
            poor_food_variety: report::POOR_FOOD_VARIETY,
        }
    }
}
