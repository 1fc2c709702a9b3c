// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, environment variable names, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Constants module
//!
//! Scoring thresholds and weights live next to the analyzer in
//! `vitality_intelligence::scoring_constants`; this module only holds values
//! shared by every crate in the workspace.

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported by the logging layer
    pub const VITALITY_ENGINE: &str = "vitality-engine";
}

/// Environment variable names understood by the configuration layers
pub mod env_vars {
    /// Body weight (kg) used for MET-based calorie estimation
    pub const BODY_WEIGHT_KG: &str = "VITALITY_BODY_WEIGHT_KG";
    /// Score delta that separates a trend from "stable"
    pub const TREND_DELTA: &str = "VITALITY_TREND_DELTA";
    /// Maximum number of insights in a report
    pub const MAX_INSIGHTS: &str = "VITALITY_MAX_INSIGHTS";
    /// Maximum number of recommendations in a report
    pub const MAX_RECOMMENDATIONS: &str = "VITALITY_MAX_RECOMMENDATIONS";
    /// Default report period length in days
    pub const DEFAULT_PERIOD_DAYS: &str = "VITALITY_DEFAULT_PERIOD_DAYS";
}

/// Unit conversion constants
pub mod units {
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Minutes in one day
    pub const MINUTES_PER_DAY: u32 = 24 * 60;
    /// Days in one week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Reference portion for per-100g calorie values
    pub const GRAMS_PER_REFERENCE_PORTION: f64 = 100.0;
}
