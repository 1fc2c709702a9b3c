// ABOUTME: Exercise log entry model and the closed exercise type vocabulary
// ABOUTME: Each exercise type carries a display name and a MET value for calorie estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::units::MINUTES_PER_HOUR;
use crate::errors::AppError;

/// Exercise types users can log
///
/// MET values follow the Compendium of Physical Activities (Ainsworth et al. 2011)
/// for a typical recreational effort.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Running or jogging
    Running,
    /// Brisk walking
    Walking,
    /// Cycling, outdoor or stationary
    Cycling,
    /// Swimming laps
    Swimming,
    /// Yoga practice
    Yoga,
    /// Weight or resistance training
    StrengthTraining,
    /// Basketball
    Basketball,
    /// Football (soccer)
    Football,
    /// Badminton
    Badminton,
    /// Tennis
    Tennis,
    /// Hiking
    Hiking,
    /// Dancing
    Dancing,
    /// Jumping rope
    JumpRope,
    /// Anything not covered above
    Other,
}

impl ExerciseType {
    /// Every exercise type, in vocabulary order
    pub const ALL: [Self; 14] = [
        Self::Running,
        Self::Walking,
        Self::Cycling,
        Self::Swimming,
        Self::Yoga,
        Self::StrengthTraining,
        Self::Basketball,
        Self::Football,
        Self::Badminton,
        Self::Tennis,
        Self::Hiking,
        Self::Dancing,
        Self::JumpRope,
        Self::Other,
    ];

    /// Stable code used in storage and serialized payloads
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Yoga => "yoga",
            Self::StrengthTraining => "strength_training",
            Self::Basketball => "basketball",
            Self::Football => "football",
            Self::Badminton => "badminton",
            Self::Tennis => "tennis",
            Self::Hiking => "hiking",
            Self::Dancing => "dancing",
            Self::JumpRope => "jump_rope",
            Self::Other => "other",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Cycling => "Cycling",
            Self::Swimming => "Swimming",
            Self::Yoga => "Yoga",
            Self::StrengthTraining => "Strength Training",
            Self::Basketball => "Basketball",
            Self::Football => "Football",
            Self::Badminton => "Badminton",
            Self::Tennis => "Tennis",
            Self::Hiking => "Hiking",
            Self::Dancing => "Dancing",
            Self::JumpRope => "Jump Rope",
            Self::Other => "Other",
        }
    }

    /// Metabolic equivalent of task for this exercise type
    #[must_use]
    pub const fn met_value(self) -> f64 {
        match self {
            Self::Running => 9.8,
            Self::Walking => 3.5,
            Self::Cycling => 7.5,
            Self::Swimming => 8.0,
            Self::Yoga => 2.5,
            Self::StrengthTraining | Self::Hiking => 6.0,
            Self::Basketball => 6.5,
            Self::Football => 7.0,
            Self::Badminton => 5.5,
            Self::Tennis => 7.3,
            Self::Dancing => 5.0,
            Self::JumpRope => 12.3,
            Self::Other => 4.0,
        }
    }

    /// Parse an exercise type, mapping unknown codes to [`ExerciseType::Other`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Other)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown exercise type: '{s}'")))
    }
}

/// Estimate calories burned from a MET value
///
/// Formula: `kcal = MET x weight_kg x hours`, rounded to the nearest integer.
#[must_use]
pub fn estimate_calories(met: f64, body_weight_kg: f64, duration_minutes: u32) -> u32 {
    let hours = f64::from(duration_minutes) / MINUTES_PER_HOUR;
    let kcal = (met * body_weight_kg * hours).round();
    if kcal.is_finite() && kcal > 0.0 {
        kcal as u32
    } else {
        0
    }
}

/// One exercise session as logged by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Date of the session
    pub date: NaiveDate,
    /// Kind of exercise
    pub exercise_type: ExerciseType,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Calories burned if the user or a device reported them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
}

impl ExerciseEntry {
    /// Create an exercise entry with reported calories
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        exercise_type: ExerciseType,
        duration_minutes: u32,
        calories_burned: Option<u32>,
    ) -> Self {
        Self {
            date,
            exercise_type,
            duration_minutes,
            calories_burned,
        }
    }

    /// Calories burned, estimated from the MET table when none were reported
    #[must_use]
    pub fn resolved_calories(&self, body_weight_kg: f64) -> u32 {
        self.calories_burned.unwrap_or_else(|| {
            estimate_calories(
                self.exercise_type.met_value(),
                body_weight_kg,
                self.duration_minutes,
            )
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_type_round_trips_through_code() {
        for kind in ExerciseType::ALL {
            assert_eq!(kind.code().parse::<ExerciseType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_exercise_type_parse_is_forgiving_about_format() {
        assert_eq!(
            "Strength Training".parse::<ExerciseType>().unwrap(),
            ExerciseType::StrengthTraining
        );
        assert_eq!(ExerciseType::from_str_lossy("curling"), ExerciseType::Other);
        assert!("curling".parse::<ExerciseType>().is_err());
    }

    #[test]
    fn test_estimate_calories_uses_met_formula() {
        // 9.8 MET x 65 kg x 0.5 h = 318.5
        assert_eq!(estimate_calories(9.8, 65.0, 30), 319);
        assert_eq!(estimate_calories(4.0, 65.0, 0), 0);
    }

    #[test]
    fn test_reported_calories_take_precedence() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let reported = ExerciseEntry::new(date, ExerciseType::Yoga, 60, Some(200));
        let estimated = ExerciseEntry::new(date, ExerciseType::Yoga, 60, None);

        assert_eq!(reported.resolved_calories(65.0), 200);
        assert_eq!(estimated.resolved_calories(65.0), 163);
        assert_eq!(estimated.resolved_calories(80.0), 200);
    }
}
