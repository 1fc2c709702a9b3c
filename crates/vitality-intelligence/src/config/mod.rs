// ABOUTME: Health scoring configuration orchestrating the per-domain scoring configs
// ABOUTME: Provides defaults from scoring constants, validation, env overrides and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Health Scoring Configuration
//!
//! Type-safe configuration for every tunable parameter of the analyzer.
//!
//! # Module Structure
//!
//! - `sleep` - Sleep duration window, regularity and quality settings
//! - `exercise` - Exercise targets and calorie estimation
//! - `diet` - Intake window and ideal meal shares
//! - `report` - Overall weighting, grades, trends and report limits
//! - `error` - Validation errors

pub mod diet;
pub mod error;
pub mod exercise;
pub mod report;
pub mod sleep;

pub use diet::{DietScoringConfig, MealShareConfig};
pub use error::ConfigError;
pub use exercise::{EstimationConfig, ExerciseScoringConfig};
pub use report::{
    GradeThresholds, InsightThresholds, OverallScoringConfig, ReportLimits, TrendConfig,
};
pub use sleep::SleepScoringConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;
use vitality_core::constants::env_vars;

use crate::scoring_constants::score_bounds::MAX_SCORE;

/// Global configuration singleton
static HEALTH_SCORING_CONFIG: OnceLock<HealthScoringConfig> = OnceLock::new();

/// Tolerance when checking that weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Main health scoring configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthScoringConfig {
    /// Sleep scoring
    pub sleep: SleepScoringConfig,
    /// Exercise scoring
    pub exercise: ExerciseScoringConfig,
    /// Diet scoring
    pub diet: DietScoringConfig,
    /// Overall weighting and grades
    pub overall: OverallScoringConfig,
    /// Trend detection
    pub trend: TrendConfig,
    /// Insight and recommendation caps
    pub limits: ReportLimits,
    /// Insight trigger thresholds
    pub insights: InsightThresholds,
    /// Calorie estimation
    pub estimation: EstimationConfig,
}

impl HealthScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        HEALTH_SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load health scoring config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a weight group does not sum to 1.0, a range is
    /// inverted, or a parameter is outside its domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_weights(
            &[
                self.sleep.duration_weight,
                self.sleep.regularity_weight,
                self.sleep.quality_weight,
            ],
            "Sleep weights must sum to 1.0",
        )?;
        Self::check_weights(
            &[
                self.exercise.frequency_weight,
                self.exercise.intensity_weight,
                self.exercise.variety_weight,
            ],
            "Exercise weights must sum to 1.0",
        )?;
        Self::check_weights(
            &[
                self.diet.calorie_weight,
                self.diet.balance_weight,
                self.diet.regularity_weight,
            ],
            "Diet weights must sum to 1.0",
        )?;
        Self::check_weights(
            &[
                self.overall.sleep_weight,
                self.overall.exercise_weight,
                self.overall.diet_weight,
            ],
            "Overall weights must sum to 1.0",
        )?;
        Self::check_weights(
            &[
                self.diet.meal_shares.breakfast,
                self.diet.meal_shares.lunch,
                self.diet.meal_shares.dinner,
                self.diet.meal_shares.snack,
            ],
            "Ideal meal shares must sum to 1.0",
        )?;

        if self.sleep.ideal_min_hours >= self.sleep.ideal_max_hours {
            return Err(ConfigError::InvalidRange(
                "ideal_min_hours must be < ideal_max_hours",
            ));
        }
        if self.diet.ideal_min_daily_calories >= self.diet.ideal_max_daily_calories {
            return Err(ConfigError::InvalidRange(
                "ideal_min_daily_calories must be < ideal_max_daily_calories",
            ));
        }

        let grades = &self.overall.grade_thresholds;
        if f64::from(grades.a_min) > MAX_SCORE
            || grades.a_min <= grades.b_min
            || grades.b_min <= grades.c_min
            || grades.c_min <= grades.d_min
        {
            return Err(ConfigError::InvalidRange(
                "Grade thresholds must be strictly descending from A to D and at most 100",
            ));
        }

        if self.trend.score_delta < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend score_delta must be non-negative",
            ));
        }
        if self.trend.fallback_improving_min > self.trend.fallback_stable_min {
            return Err(ConfigError::InvalidRange(
                "fallback_improving_min must be <= fallback_stable_min",
            ));
        }

        if self.limits.high_priority_below > self.limits.medium_priority_below {
            return Err(ConfigError::InvalidRange(
                "high_priority_below must be <= medium_priority_below",
            ));
        }

        if !self.estimation.body_weight_kg.is_finite() || self.estimation.body_weight_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "body_weight_kg must be a positive number",
            ));
        }
        if self.exercise.calories_per_point <= 0.0
            || self.diet.calories_per_point <= 0.0
            || self.sleep.variance_per_point <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Per-point penalty divisors must be positive",
            ));
        }

        Ok(())
    }

    fn check_weights(weights: &[f64], message: &'static str) -> Result<(), ConfigError> {
        let sum: f64 = weights.iter().sum();
        let in_range = weights.iter().all(|w| w.is_finite() && *w >= 0.0);
        if !in_range || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(message));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a set variable cannot be parsed
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::BODY_WEIGHT_KG,
            &mut self.estimation.body_weight_kg,
        )?;
        Self::apply_env_var(env_vars::TREND_DELTA, &mut self.trend.score_delta)?;
        Self::apply_env_var(env_vars::MAX_INSIGHTS, &mut self.limits.max_insights)?;
        Self::apply_env_var(
            env_vars::MAX_RECOMMENDATIONS,
            &mut self.limits.max_recommendations,
        )?;
        Ok(self)
    }
}
