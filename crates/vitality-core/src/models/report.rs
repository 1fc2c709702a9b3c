// ABOUTME: Health report value object produced by the analyzer
// ABOUTME: Scores, grade, trends, insights, recommendations, summaries and per-domain breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use super::diet::MealType;
use super::exercise::ExerciseType;
use super::period::Period;

/// Letter grade bucketing the overall score into five tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthGrade {
    /// Excellent
    A,
    /// Good
    B,
    /// Fair
    C,
    /// Needs improvement
    D,
    /// Poor
    F,
}

impl HealthGrade {
    /// Descriptive label for the grade
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "excellent",
            Self::B => "good",
            Self::C => "fair",
            Self::D => "needs_improvement",
            Self::F => "poor",
        }
    }
}

impl fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

/// Direction of a score compared to the previous period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HealthTrend {
    /// Score went up by more than the trend delta
    Improving,
    /// Score stayed within the trend delta
    Stable,
    /// Score went down by more than the trend delta
    Declining,
}

/// What the overall trend was derived from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendBasis {
    /// Compared against a stored report for the preceding period
    PreviousPeriod,
    /// No previous report was available, inferred from the absolute score
    AbsoluteScore,
}

/// Per-domain trends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainTrends {
    /// Sleep score trend
    pub sleep: HealthTrend,
    /// Exercise score trend
    pub exercise: HealthTrend,
    /// Diet score trend
    pub diet: HealthTrend,
}

/// Health domain a recommendation addresses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HealthDomain {
    /// Sleep habits
    Sleep,
    /// Physical activity
    Exercise,
    /// Food intake
    Diet,
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Address first
    High,
    /// Worth improving
    Medium,
}

/// Structured recommendation item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Domain the recommendation belongs to
    pub category: HealthDomain,
    /// Urgency
    pub priority: RecommendationPriority,
    /// Short title
    pub title: String,
    /// Actionable description
    pub description: String,
}

/// Counts and averages over the period
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataSummary {
    /// Number of sleep entries
    pub sleep_days: u32,
    /// Distinct dates with at least one exercise entry
    pub exercise_days: u32,
    /// Distinct dates with at least one diet entry
    pub diet_days: u32,
    /// Mean nightly sleep in hours, one decimal
    pub avg_sleep_hours: f64,
    /// Sum of calories burned
    pub total_calories_burned: u32,
    /// Sum of exercise minutes
    pub total_exercise_minutes: u32,
    /// Mean daily calorie intake over days with diet entries
    pub avg_calories_intake: u32,
}

/// Sleep breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepAnalysis {
    /// Mean nightly sleep in hours, one decimal
    pub avg_sleep_duration: f64,
    /// Bedtime/wake time regularity score (0-100)
    pub sleep_regularity_score: u8,
    /// Date of the longest night
    pub best_sleep_day: NaiveDate,
    /// Date of the shortest night
    pub worst_sleep_day: NaiveDate,
    /// Longest night in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_sleep_hours: Option<f64>,
    /// Shortest night in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest_sleep_hours: Option<f64>,
}

/// Per-exercise-type totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseTypeBreakdown {
    /// Exercise type
    pub exercise_type: ExerciseType,
    /// Number of sessions
    pub sessions: u32,
    /// Total minutes
    pub total_minutes: u32,
    /// Total calories burned
    pub total_calories: u32,
}

/// Exercise breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseAnalysis {
    /// Total exercise minutes
    pub total_exercise_time: u32,
    /// Mean calories per session
    pub avg_calories_burned: u32,
    /// Distinct dates with exercise
    pub exercise_frequency: u32,
    /// Most frequent exercise type (first encountered wins ties)
    pub dominant_exercise_type: ExerciseType,
    /// Totals per exercise type, in first-encountered order
    pub type_distribution: Vec<ExerciseTypeBreakdown>,
}

/// Diet breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietAnalysis {
    /// Mean daily calorie intake
    pub avg_daily_calories: u32,
    /// Food variety and meal distribution score (0-100)
    pub meal_balance_score: u8,
    /// Meal with the largest calorie sum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_calorific_meal: Option<MealType>,
    /// Whole-percent calorie share per meal, empty when no calories were logged
    pub calorie_distribution: BTreeMap<MealType, u32>,
}

/// Per-domain breakdowns, present only for domains with data
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetailedAnalysis {
    /// Sleep breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepAnalysis>,
    /// Exercise breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseAnalysis>,
    /// Diet breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietAnalysis>,
}

/// One-shot snapshot of a user's health over a period
///
/// Persisting or invalidating the report is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthReport {
    /// User the report belongs to
    pub user_id: Uuid,
    /// Period the report covers
    pub period: Period,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Weighted overall score (0-100)
    pub overall_score: u8,
    /// Sleep sub-score (0-100)
    pub sleep_score: u8,
    /// Exercise sub-score (0-100)
    pub exercise_score: u8,
    /// Diet sub-score (0-100)
    pub diet_score: u8,
    /// Grade derived from the overall score
    pub health_grade: HealthGrade,
    /// Overall trend
    pub health_trend: HealthTrend,
    /// Whether the trend came from history or the absolute score
    pub trend_basis: TrendBasis,
    /// Per-domain trends
    pub domain_trends: DomainTrends,
    /// Short natural-language observations
    pub key_insights: Vec<String>,
    /// Structured recommendations
    pub recommendations: Vec<Recommendation>,
    /// Counts and averages
    pub data_summary: DataSummary,
    /// Per-domain breakdowns
    pub detailed_analysis: DetailedAnalysis,
}
