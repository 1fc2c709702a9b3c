// ABOUTME: Rule-based insight and recommendation generation from records and sub-scores
// ABOUTME: Evaluates rules in a fixed order and truncates to the configured caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use vitality_core::models::{HealthDomain, Recommendation, RecommendationPriority};

use super::{HealthAnalyzer, ScoreCard};

impl HealthAnalyzer<'_> {
    /// Natural-language observations about the period
    ///
    /// Rules run in order (sleep duration, sleep logging, exercise frequency,
    /// food variety) with at most one insight per rule. A fifth daily intake
    /// rule runs after the four core rules, so it is the first one dropped
    /// when the list is capped.
    #[must_use]
    pub fn generate_key_insights(&self) -> Vec<String> {
        let mut insights = Vec::new();
        insights.extend(self.sleep_duration_insight());
        insights.extend(self.sleep_logging_insight());
        insights.extend(self.exercise_frequency_insight());
        insights.extend(self.food_variety_insight());
        insights.extend(self.daily_intake_insight());
        insights.truncate(self.config.limits.max_insights);
        insights
    }

    fn sleep_duration_insight(&self) -> Option<String> {
        let thresholds = &self.config.insights;
        let avg_hours = self.average_sleep_hours()?;
        if avg_hours >= thresholds.well_rested_hours {
            Some(
                "Sleep is on track: average nightly duration meets the recommended amount"
                    .to_owned(),
            )
        } else if avg_hours < thresholds.sleep_deficit_hours {
            Some("Sleep deficit detected: try to spend more time asleep each night".to_owned())
        } else {
            None
        }
    }

    fn sleep_logging_insight(&self) -> Option<String> {
        (self.records.sleep.len() >= self.config.insights.consistent_sleep_log_entries).then(|| {
            "Sleep logging is consistent, which helps build a regular routine".to_owned()
        })
    }

    fn exercise_frequency_insight(&self) -> Option<String> {
        if self.records.exercise.is_empty() {
            return None;
        }
        let thresholds = &self.config.insights;
        let days = self.exercise_day_count();
        let message = if days >= thresholds.ideal_exercise_days {
            "Exercise frequency meets the ideal target"
        } else if days >= thresholds.good_exercise_days {
            "Exercise frequency is good, keep it up"
        } else {
            "Exercise frequency is low, try adding more sessions"
        };
        Some(message.to_owned())
    }

    fn food_variety_insight(&self) -> Option<String> {
        if self.records.diet.is_empty() {
            return None;
        }
        let thresholds = &self.config.insights;
        let variety = self.distinct_food_count();
        if variety >= thresholds.rich_food_variety {
            Some("Diet is varied and covers a balanced range of foods".to_owned())
        } else if variety < thresholds.poor_food_variety {
            Some("Diet variety is limited, try adding more kinds of food".to_owned())
        } else {
            None
        }
    }

    /// Fifth rule, added on top of the four core rules: flags an average
    /// daily intake outside the calorie-control window
    fn daily_intake_insight(&self) -> Option<String> {
        let avg_daily = self.average_daily_calories()?;
        let config = &self.config.diet;
        let kcal = avg_daily.trunc();
        if avg_daily > config.ideal_max_daily_calories {
            Some(format!(
                "Average daily intake of {kcal} kcal is above the recommended {:.0}-{:.0} kcal",
                config.ideal_min_daily_calories, config.ideal_max_daily_calories
            ))
        } else if avg_daily < config.ideal_min_daily_calories {
            Some(format!(
                "Average daily intake of {kcal} kcal is below the recommended {:.0}-{:.0} kcal",
                config.ideal_min_daily_calories, config.ideal_max_daily_calories
            ))
        } else {
            None
        }
    }

    /// Structured recommendations for domains scoring below the cut-offs
    ///
    /// Domains are visited in the order sleep, exercise, diet.
    #[must_use]
    pub fn generate_recommendations(&self, scores: &ScoreCard) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = [
            (HealthDomain::Sleep, scores.sleep),
            (HealthDomain::Exercise, scores.exercise),
            (HealthDomain::Diet, scores.diet),
        ]
        .into_iter()
        .filter_map(|(domain, score)| {
            self.priority_for(score)
                .map(|priority| self.recommendation(domain, priority))
        })
        .collect();
        recommendations.truncate(self.config.limits.max_recommendations);
        recommendations
    }

    fn priority_for(&self, score: u8) -> Option<RecommendationPriority> {
        let limits = &self.config.limits;
        if score < limits.high_priority_below {
            Some(RecommendationPriority::High)
        } else if score < limits.medium_priority_below {
            Some(RecommendationPriority::Medium)
        } else {
            None
        }
    }

    fn recommendation(
        &self,
        category: HealthDomain,
        priority: RecommendationPriority,
    ) -> Recommendation {
        let sleep = &self.config.sleep;
        let (title, description) = match (category, priority) {
            (HealthDomain::Sleep, RecommendationPriority::High) => (
                "Improve sleep quality".to_owned(),
                format!(
                    "Keep a regular schedule and aim for {}-{} hours of sleep every night",
                    sleep.ideal_min_hours, sleep.ideal_max_hours
                ),
            ),
            (HealthDomain::Sleep, RecommendationPriority::Medium) => (
                "Refine sleep habits".to_owned(),
                "Sleep is in good shape; avoid screens in the hour before bed".to_owned(),
            ),
            (HealthDomain::Exercise, RecommendationPriority::High) => (
                "Exercise more often".to_owned(),
                "Aim for 4-5 aerobic sessions a week, 30-45 minutes each".to_owned(),
            ),
            (HealthDomain::Exercise, RecommendationPriority::Medium) => (
                "Diversify your workouts".to_owned(),
                "Add strength and flexibility work to your current routine".to_owned(),
            ),
            (HealthDomain::Diet, RecommendationPriority::High) => (
                "Improve your diet structure".to_owned(),
                "Eat more vegetables and fruit, limit high-calorie foods and keep meals balanced"
                    .to_owned(),
            ),
            (HealthDomain::Diet, RecommendationPriority::Medium) => (
                "Regularize meal times".to_owned(),
                "Keep fixed meal times and spread calories sensibly across meals".to_owned(),
            ),
        };
        Recommendation {
            category,
            priority,
            title,
            description,
        }
    }
}
