// ABOUTME: Health scoring and report analysis engine for the Vitality platform
// ABOUTME: Weighted sub-scores, grades, trends, insights, recommendations and record statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

#![deny(unsafe_code)]

//! # Vitality Intelligence
//!
//! Turns a user's sleep, exercise and diet logs for one period into a
//! [`HealthReport`](vitality_core::models::HealthReport). The engine is pure
//! synchronous computation: callers fetch records, the analyzer scores them,
//! and the only collaborator it touches is the report store used for trend
//! comparison.
//!
//! ## Modules
//!
//! - **analyzer**: `HealthAnalyzer` and the scoring sub-algorithms
//! - **config**: Runtime-tunable scoring configuration
//! - **scoring_constants**: Named weights and thresholds backing the config defaults
//! - **record_statistics**: Period-independent aggregates over one collection
//! - **statistics**: Mean, variance and mode helpers

/// Health analyzer and report assembly
pub mod analyzer;

/// Scoring configuration with validation and environment overrides
pub mod config;

/// Aggregate statistics over single record collections
pub mod record_statistics;

/// Named scoring weights and thresholds
pub mod scoring_constants;

/// Statistical helpers
pub mod statistics;

pub use analyzer::{HealthAnalyzer, HealthRecords, ScoreCard, TrendAssessment};
pub use config::{ConfigError, HealthScoringConfig};
pub use record_statistics::{ExerciseStatistics, SleepStatistics};
