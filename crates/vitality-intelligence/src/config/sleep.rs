// ABOUTME: Sleep scoring configuration for duration, regularity and quality components
// ABOUTME: Ideal sleep window, variance penalty and continuity bonus settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Sleep Scoring Configuration
//!
//! # Scientific References
//!
//! - Sleep duration: NSF/AASM guidelines (Watson et al. 2015, Hirshkowitz et al. 2015)

use serde::{Deserialize, Serialize};

use crate::scoring_constants::sleep;

/// Sleep scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepScoringConfig {
    /// Weight of the duration component (0.0-1.0)
    pub duration_weight: f64,
    /// Weight of the regularity component (0.0-1.0)
    pub regularity_weight: f64,
    /// Weight of the quality component (0.0-1.0)
    pub quality_weight: f64,
    /// Lower bound of the ideal nightly sleep (hours)
    pub ideal_min_hours: f64,
    /// Upper bound of the ideal nightly sleep (hours)
    pub ideal_max_hours: f64,
    /// Points lost per hour outside the ideal window
    pub duration_penalty_per_hour: f64,
    /// Entries needed before regularity is measured
    pub min_entries_for_regularity: usize,
    /// Regularity score used below `min_entries_for_regularity`
    pub insufficient_data_regularity: f64,
    /// Floor of the bedtime and wake time regularity components
    pub regularity_floor: f64,
    /// Variance (minutes squared) that costs one regularity point
    pub variance_per_point: f64,
    /// Bonus points per logged night
    pub continuity_bonus_per_entry: f64,
    /// Cap on the continuity bonus
    pub max_continuity_bonus: f64,
}

impl Default for SleepScoringConfig {
    fn default() -> Self {
        Self {
            duration_weight: sleep::DURATION_WEIGHT,
            regularity_weight: sleep::REGULARITY_WEIGHT,
            quality_weight: sleep::QUALITY_WEIGHT,
            ideal_min_hours: sleep::IDEAL_MIN_HOURS,
            ideal_max_hours: sleep::IDEAL_MAX_HOURS,
            duration_penalty_per_hour: sleep::DURATION_PENALTY_PER_HOUR,
            min_entries_for_regularity: sleep::MIN_ENTRIES_FOR_REGULARITY,
            insufficient_data_regularity: sleep::INSUFFICIENT_DATA_REGULARITY,
            regularity_floor: sleep::REGULARITY_FLOOR,
            variance_per_point: sleep::VARIANCE_PER_POINT,
            continuity_bonus_per_entry: sleep::CONTINUITY_BONUS_PER_ENTRY,
            max_continuity_bonus: sleep::MAX_CONTINUITY_BONUS,
        }
    }
}

impl SleepScoringConfig {
    /// Whether `hours` lies inside the ideal window (inclusive)
    #[must_use]
    pub fn is_ideal_duration(&self, hours: f64) -> bool {
        (self.ideal_min_hours..=self.ideal_max_hours).contains(&hours)
    }
}
