// ABOUTME: Diet scoring from daily intake, food variety, meal calorie split and logging regularity
// ABOUTME: Calorie control, balance and regularity components; malformed entries add no calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use vitality_core::models::MealType;

use super::HealthAnalyzer;
use crate::statistics::{clamp_score, mean, truncate_score, weighted_sum};

impl HealthAnalyzer<'_> {
    /// Diet score (0-100), 0 without diet entries
    #[must_use]
    pub fn calculate_diet_score(&self) -> u8 {
        truncate_score(self.raw_diet_score())
    }

    pub(super) fn raw_diet_score(&self) -> f64 {
        if self.records.diet.is_empty() {
            return 0.0;
        }
        let weights = &self.config.diet;
        weighted_sum(&[
            (clamp_score(self.diet_calorie_score()), weights.calorie_weight),
            (clamp_score(self.diet_balance_score()), weights.balance_weight),
            (
                clamp_score(self.diet_regularity_score()),
                weights.regularity_weight,
            ),
        ])
    }

    /// Calorie sum per date, over entries with a valid calorie count
    pub(super) fn daily_calories(&self) -> BTreeMap<NaiveDate, f64> {
        let mut daily = BTreeMap::new();
        for entry in &self.records.diet {
            if let Some(calories) = entry.total_calories() {
                *daily.entry(entry.date).or_insert(0.0) += calories;
            }
        }
        daily
    }

    /// Mean of the daily calorie sums
    pub(super) fn average_daily_calories(&self) -> Option<f64> {
        let daily: Vec<f64> = self.daily_calories().into_values().collect();
        mean(&daily)
    }

    /// Calorie sum per meal type, in first-encountered order
    pub(super) fn meal_calories(&self) -> Vec<(MealType, f64)> {
        let mut meals: Vec<(MealType, f64)> = Vec::new();
        for entry in &self.records.diet {
            let Some(calories) = entry.total_calories() else {
                continue;
            };
            match meals.iter_mut().find(|(meal, _)| *meal == entry.meal_type) {
                Some((_, total)) => *total += calories,
                None => meals.push((entry.meal_type, calories)),
            }
        }
        meals
    }

    /// Distinct food names, compared exactly
    pub(super) fn distinct_food_count(&self) -> usize {
        self.records
            .diet
            .iter()
            .map(|e| e.food_name.as_str())
            .collect::<BTreeSet<&str>>()
            .len()
    }

    /// Distinct dates with at least one diet entry
    pub(super) fn diet_day_count(&self) -> usize {
        self.records
            .diet
            .iter()
            .map(|e| e.date)
            .collect::<BTreeSet<NaiveDate>>()
            .len()
    }

    /// 100 inside the ideal daily intake window, minus a penalty per calorie
    /// outside it
    #[must_use]
    pub fn diet_calorie_score(&self) -> f64 {
        let Some(avg_daily) = self.average_daily_calories() else {
            return 0.0;
        };
        let config = &self.config.diet;
        if config.is_ideal_intake(avg_daily) {
            return 100.0;
        }
        let deviation = (avg_daily - config.ideal_min_daily_calories)
            .abs()
            .min((avg_daily - config.ideal_max_daily_calories).abs());
        (100.0 - deviation / config.calories_per_point).max(0.0)
    }

    /// Average of food variety and meal distribution scores
    #[must_use]
    pub fn diet_balance_score(&self) -> f64 {
        let variety =
            (self.distinct_food_count() as f64 * self.config.diet.points_per_food).min(100.0);
        (variety + self.meal_distribution_score()) / 2.0
    }

    /// 100 minus the summed deviation of each meal's calorie share from its
    /// ideal share, floored at 0; 0 when no calories were logged
    #[must_use]
    pub fn meal_distribution_score(&self) -> f64 {
        let meals = self.meal_calories();
        let total: f64 = meals.iter().map(|(_, calories)| calories).sum();
        if total <= 0.0 {
            return 0.0;
        }

        let shares = &self.config.diet.meal_shares;
        let score = MealType::ALL.into_iter().fold(100.0, |score, meal| {
            let calories = meals
                .iter()
                .find(|(m, _)| *m == meal)
                .map_or(0.0, |(_, calories)| *calories);
            let deviation = (calories / total - shares.ideal_share(meal)).abs();
            score - deviation * 100.0
        });
        score.max(0.0)
    }

    /// Average of logging completeness and meal type coverage
    #[must_use]
    pub fn diet_regularity_score(&self) -> f64 {
        let completeness = self.diet_day_count() as f64 / self.period.days_f64() * 100.0;
        let meal_types: BTreeSet<MealType> =
            self.records.diet.iter().map(|e| e.meal_type).collect();
        let coverage = meal_types.len() as f64 / MealType::ALL.len() as f64 * 100.0;
        (completeness + coverage) / 2.0
    }
}
