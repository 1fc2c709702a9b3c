// ABOUTME: Diet log entry model and the closed meal type vocabulary
// ABOUTME: Entry calories are derived from portion size and calories per 100 g
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::units::GRAMS_PER_REFERENCE_PORTION;
use crate::errors::AppError;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Every meal type, in the order meals happen during a day
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Stable code used in storage and serialized payloads
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(AppError::invalid_input(format!("Unknown meal type: '{s}'"))),
        }
    }
}

/// One food item eaten as part of a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietEntry {
    /// Date the food was eaten
    pub date: NaiveDate,
    /// Meal the food belongs to
    pub meal_type: MealType,
    /// Free text food name
    pub food_name: String,
    /// Portion size in grams
    pub portion_grams: f64,
    /// Energy density of the food
    pub calories_per_100g: f64,
}

impl DietEntry {
    /// Create a diet entry
    pub fn new(
        date: NaiveDate,
        meal_type: MealType,
        food_name: impl Into<String>,
        portion_grams: f64,
        calories_per_100g: f64,
    ) -> Self {
        Self {
            date,
            meal_type,
            food_name: food_name.into(),
            portion_grams,
            calories_per_100g,
        }
    }

    /// Total calories of this entry: `portion x calories_per_100g / 100`
    ///
    /// Returns `None` for negative or non-finite inputs so the entry can be
    /// left out of aggregates.
    #[must_use]
    pub fn total_calories(&self) -> Option<f64> {
        let total = self.portion_grams * self.calories_per_100g / GRAMS_PER_REFERENCE_PORTION;
        (total.is_finite() && self.portion_grams >= 0.0 && self.calories_per_100g >= 0.0)
            .then_some(total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(portion: f64, density: f64) -> DietEntry {
        DietEntry::new(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            MealType::Lunch,
            "rice",
            portion,
            density,
        )
    }

    #[test]
    fn test_total_calories_from_portion() {
        assert_eq!(entry(250.0, 116.0).total_calories(), Some(290.0));
        assert_eq!(entry(0.0, 116.0).total_calories(), Some(0.0));
    }

    #[test]
    fn test_invalid_portions_have_no_calories() {
        assert_eq!(entry(-10.0, 116.0).total_calories(), None);
        assert_eq!(entry(f64::NAN, 116.0).total_calories(), None);
        assert_eq!(entry(100.0, f64::INFINITY).total_calories(), None);
    }

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!(" Dinner ".parse::<MealType>().unwrap(), MealType::Dinner);
        assert!("brunch".parse::<MealType>().is_err());
    }
}
