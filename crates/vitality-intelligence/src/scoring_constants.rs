// ABOUTME: Named weights and thresholds for health scoring, grading and trend detection
// ABOUTME: Single source of every scoring constant; configuration defaults are built from these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Scoring constants
//!
//! Every weight and threshold used by the analyzer is defined here and only
//! here. [`crate::config::HealthScoringConfig::default`] copies these values so
//! they can be tuned at runtime without touching the scoring functions.

/// Bounds shared by every score
pub mod score_bounds {
    /// Lowest possible score
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest possible score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Sleep scoring
///
/// Reference: Watson, N.F., et al. (2015). Recommended Amount of Sleep for a
/// Healthy Adult. *Sleep*, 38(6), 843-844.
pub mod sleep {
    /// Weight of the duration component
    pub const DURATION_WEIGHT: f64 = 0.40;
    /// Weight of the regularity component
    pub const REGULARITY_WEIGHT: f64 = 0.35;
    /// Weight of the quality component
    pub const QUALITY_WEIGHT: f64 = 0.25;

    /// Lower bound of the ideal nightly sleep (hours)
    pub const IDEAL_MIN_HOURS: f64 = 7.0;
    /// Upper bound of the ideal nightly sleep (hours)
    pub const IDEAL_MAX_HOURS: f64 = 9.0;
    /// Points lost per hour outside the ideal range
    pub const DURATION_PENALTY_PER_HOUR: f64 = 10.0;

    /// Entries needed before regularity is measured
    pub const MIN_ENTRIES_FOR_REGULARITY: usize = 3;
    /// Regularity score given when there are too few entries
    pub const INSUFFICIENT_DATA_REGULARITY: f64 = 60.0;
    /// Floor of each regularity component
    pub const REGULARITY_FLOOR: f64 = 60.0;
    /// Variance (minutes squared) that costs one regularity point
    pub const VARIANCE_PER_POINT: f64 = 60.0;

    /// Bonus points per logged night
    pub const CONTINUITY_BONUS_PER_ENTRY: f64 = 2.0;
    /// Cap on the continuity bonus
    pub const MAX_CONTINUITY_BONUS: f64 = 10.0;
}

/// Exercise scoring
///
/// Reference: WHO (2020) Guidelines on physical activity and sedentary behaviour.
pub mod exercise {
    /// Weight of the frequency component
    pub const FREQUENCY_WEIGHT: f64 = 0.35;
    /// Weight of the intensity component
    pub const INTENSITY_WEIGHT: f64 = 0.40;
    /// Weight of the variety component
    pub const VARIETY_WEIGHT: f64 = 0.25;

    /// Ideal exercise days per week
    pub const IDEAL_DAYS_PER_WEEK: f64 = 5.0;
    /// Cap on the ideal number of exercise days in any period
    pub const MAX_IDEAL_DAYS: f64 = 6.0;

    /// Weekly calorie burn target (kcal)
    pub const WEEKLY_CALORIE_TARGET: f64 = 2000.0;
    /// Relative tolerance around the calorie target that still scores 100
    pub const CALORIE_TARGET_TOLERANCE: f64 = 0.25;
    /// Calories off target that cost one intensity point
    pub const CALORIES_PER_POINT: f64 = 20.0;

    /// Points per distinct exercise type
    pub const POINTS_PER_EXERCISE_TYPE: f64 = 20.0;

    /// Body weight used for MET calorie estimation (kg)
    pub const DEFAULT_BODY_WEIGHT_KG: f64 = 65.0;
}

/// Diet scoring
pub mod diet {
    /// Weight of the calorie control component
    pub const CALORIE_WEIGHT: f64 = 0.45;
    /// Weight of the balance component
    pub const BALANCE_WEIGHT: f64 = 0.35;
    /// Weight of the regularity component
    pub const REGULARITY_WEIGHT: f64 = 0.20;

    /// Lower bound of the ideal daily intake (kcal)
    pub const IDEAL_MIN_DAILY_CALORIES: f64 = 1800.0;
    /// Upper bound of the ideal daily intake (kcal)
    pub const IDEAL_MAX_DAILY_CALORIES: f64 = 2200.0;
    /// Calories off target that cost one calorie control point
    pub const CALORIES_PER_POINT: f64 = 20.0;

    /// Points per distinct food
    pub const POINTS_PER_FOOD: f64 = 5.0;

    /// Ideal share of daily calories at breakfast
    pub const IDEAL_BREAKFAST_SHARE: f64 = 0.25;
    /// Ideal share of daily calories at lunch
    pub const IDEAL_LUNCH_SHARE: f64 = 0.40;
    /// Ideal share of daily calories at dinner
    pub const IDEAL_DINNER_SHARE: f64 = 0.30;
    /// Ideal share of daily calories from snacks
    pub const IDEAL_SNACK_SHARE: f64 = 0.05;
}

/// Overall score and grade
pub mod overall {
    /// Weight of the sleep score
    pub const SLEEP_WEIGHT: f64 = 0.35;
    /// Weight of the exercise score
    pub const EXERCISE_WEIGHT: f64 = 0.35;
    /// Weight of the diet score
    pub const DIET_WEIGHT: f64 = 0.30;

    /// Lowest score graded A
    pub const GRADE_A_MIN: u8 = 90;
    /// Lowest score graded B
    pub const GRADE_B_MIN: u8 = 80;
    /// Lowest score graded C
    pub const GRADE_C_MIN: u8 = 70;
    /// Lowest score graded D
    pub const GRADE_D_MIN: u8 = 60;
}

/// Trend detection
pub mod trend {
    /// Score change (points) beyond which a trend is not "stable"
    pub const SCORE_DELTA: i16 = 5;
    /// Without history, scores at or above this are "stable"
    pub const FALLBACK_STABLE_MIN: u8 = 85;
    /// Without history, scores at or above this are "improving"
    pub const FALLBACK_IMPROVING_MIN: u8 = 70;
}

/// Recommendations and insights
pub mod report {
    /// Sub-scores below this produce a high priority recommendation
    pub const HIGH_PRIORITY_BELOW: u8 = 70;
    /// Sub-scores below this produce a medium priority recommendation
    pub const MEDIUM_PRIORITY_BELOW: u8 = 85;
    /// Maximum number of insights
    pub const MAX_INSIGHTS: usize = 5;
    /// Maximum number of recommendations
    pub const MAX_RECOMMENDATIONS: usize = 6;

    /// Average sleep at or above this is reported as well rested
    pub const WELL_RESTED_HOURS: f64 = 8.0;
    /// Average sleep below this is reported as a deficit
    pub const SLEEP_DEFICIT_HOURS: f64 = 7.0;
    /// Sleep entries needed to praise logging consistency
    pub const CONSISTENT_SLEEP_LOG_ENTRIES: usize = 5;
    /// Exercise days meeting the ideal frequency
    pub const IDEAL_EXERCISE_DAYS: usize = 4;
    /// Exercise days considered a good frequency
    pub const GOOD_EXERCISE_DAYS: usize = 2;
    /// Distinct foods indicating a varied diet
    pub const RICH_FOOD_VARIETY: usize = 15;
    /// Distinct foods below which the diet is monotonous
    pub const POOR_FOOD_VARIETY: usize = 8;
}
