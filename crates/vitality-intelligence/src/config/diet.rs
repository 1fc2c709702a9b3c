// ABOUTME: Diet scoring configuration for calorie control, balance and regularity components
// ABOUTME: Ideal daily intake window and the ideal calorie share of each meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Diet Scoring Configuration

use serde::{Deserialize, Serialize};
use vitality_core::models::MealType;

use crate::scoring_constants::diet;

/// Diet scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietScoringConfig {
    /// Weight of the calorie control component (0.0-1.0)
    pub calorie_weight: f64,
    /// Weight of the balance component (0.0-1.0)
    pub balance_weight: f64,
    /// Weight of the regularity component (0.0-1.0)
    pub regularity_weight: f64,
    /// Lower bound of the ideal daily intake (kcal)
    pub ideal_min_daily_calories: f64,
    /// Upper bound of the ideal daily intake (kcal)
    pub ideal_max_daily_calories: f64,
    /// Calories off target that cost one calorie control point
    pub calories_per_point: f64,
    /// Points per distinct food
    pub points_per_food: f64,
    /// Ideal calorie share per meal
    pub meal_shares: MealShareConfig,
}

impl Default for DietScoringConfig {
    fn default() -> Self {
        Self {
            calorie_weight: diet::CALORIE_WEIGHT,
            balance_weight: diet::BALANCE_WEIGHT,
            regularity_weight: diet::REGULARITY_WEIGHT,
            ideal_min_daily_calories: diet::IDEAL_MIN_DAILY_CALORIES,
            ideal_max_daily_calories: diet::IDEAL_MAX_DAILY_CALORIES,
            calories_per_point: diet::CALORIES_PER_POINT,
            points_per_food: diet::POINTS_PER_FOOD,
            meal_shares: MealShareConfig::default(),
        }
    }
}

impl DietScoringConfig {
    /// Whether a daily intake lies inside the ideal window (inclusive)
    #[must_use]
    pub fn is_ideal_intake(&self, daily_calories: f64) -> bool {
        (self.ideal_min_daily_calories..=self.ideal_max_daily_calories).contains(&daily_calories)
    }
}

/// Ideal fraction of daily calories per meal, summing to 1.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealShareConfig {
    /// Breakfast share
    pub breakfast: f64,
    /// Lunch share
    pub lunch: f64,
    /// Dinner share
    pub dinner: f64,
    /// Snack share
    pub snack: f64,
}

impl Default for MealShareConfig {
    fn default() -> Self {
        Self {
            breakfast: diet::IDEAL_BREAKFAST_SHARE,
            lunch: diet::IDEAL_LUNCH_SHARE,
            dinner: diet::IDEAL_DINNER_SHARE,
            snack: diet::IDEAL_SNACK_SHARE,
        }
    }
}

impl MealShareConfig {
    /// Ideal share for one meal
    #[must_use]
    pub const fn ideal_share(&self, meal: MealType) -> f64 {
        match meal {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }

    /// Sum of all shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}
