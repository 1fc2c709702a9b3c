// ABOUTME: Core data models for sleep, exercise and diet tracking
// ABOUTME: Re-exports entries, vocabularies, the food catalog, periods, and report types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Domain models shared by the analyzer and its collaborators.

/// Diet entries and meal types
pub mod diet;
/// Exercise entries, exercise types and MET calorie estimation
pub mod exercise;
/// Food calorie reference catalog
pub mod food;
/// Reporting periods
pub mod period;
/// Health report value object
pub mod report;
/// Sleep entries
pub mod sleep;

pub use diet::{DietEntry, MealType};
pub use exercise::{estimate_calories, ExerciseEntry, ExerciseType};
pub use food::{FoodCalorieReference, FoodCatalog, FoodCategory};
pub use period::Period;
pub use report::{
    DataSummary, DetailedAnalysis, DietAnalysis, DomainTrends, ExerciseAnalysis,
    ExerciseTypeBreakdown, HealthDomain, HealthGrade, HealthReport, HealthTrend,
    Recommendation, RecommendationPriority, SleepAnalysis, TrendBasis,
};
pub use sleep::SleepEntry;
