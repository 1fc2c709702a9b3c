// ABOUTME: Exercise scoring configuration for frequency, intensity and variety components
// ABOUTME: Weekly targets and the body weight used for MET calorie estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Exercise Scoring Configuration

use serde::{Deserialize, Serialize};

use crate::scoring_constants::exercise;

/// Exercise scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseScoringConfig {
    /// Weight of the frequency component (0.0-1.0)
    pub frequency_weight: f64,
    /// Weight of the intensity component (0.0-1.0)
    pub intensity_weight: f64,
    /// Weight of the variety component (0.0-1.0)
    pub variety_weight: f64,
    /// Ideal exercise days per week
    pub ideal_days_per_week: f64,
    /// Cap on the ideal number of exercise days in any period
    pub max_ideal_days: f64,
    /// Calories to burn per week (kcal)
    pub weekly_calorie_target: f64,
    /// Relative tolerance around the calorie target that still scores 100
    pub calorie_target_tolerance: f64,
    /// Calories off target that cost one intensity point
    pub calories_per_point: f64,
    /// Points per distinct exercise type
    pub points_per_exercise_type: f64,
}

impl Default for ExerciseScoringConfig {
    fn default() -> Self {
        Self {
            frequency_weight: exercise::FREQUENCY_WEIGHT,
            intensity_weight: exercise::INTENSITY_WEIGHT,
            variety_weight: exercise::VARIETY_WEIGHT,
            ideal_days_per_week: exercise::IDEAL_DAYS_PER_WEEK,
            max_ideal_days: exercise::MAX_IDEAL_DAYS,
            weekly_calorie_target: exercise::WEEKLY_CALORIE_TARGET,
            calorie_target_tolerance: exercise::CALORIE_TARGET_TOLERANCE,
            calories_per_point: exercise::CALORIES_PER_POINT,
            points_per_exercise_type: exercise::POINTS_PER_EXERCISE_TYPE,
        }
    }
}

/// Calorie estimation parameters
///
/// Only used for exercise entries logged without a calorie count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Body weight used in `MET x kg x hours` (kg)
    pub body_weight_kg: f64,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            body_weight_kg: exercise::DEFAULT_BODY_WEIGHT_KG,
        }
    }
}
