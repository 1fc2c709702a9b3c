// ABOUTME: Health analyzer turning sleep, exercise and diet logs into a scored health report
// ABOUTME: Combines sub-scores, classifies grade and trend, and assembles the report value object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! # Health Analyzer
//!
//! [`HealthAnalyzer`] scores one user over one [`Period`] from record
//! collections that the caller has already fetched and filtered. Scoring is
//! split by domain:
//!
//! - `sleep` - duration, bedtime/wake regularity and nightly quality
//! - `exercise` - frequency, calorie intensity and variety
//! - `diet` - calorie control, balance and meal regularity
//! - `insights` - natural-language insights and recommendations
//! - `summary` - data summary and per-domain breakdowns
//!
//! Empty collections score 0 rather than failing. The only fallible step is
//! report assembly, which rejects non-finite intermediate scores so no
//! partial report is ever returned.

mod diet;
mod exercise;
mod insights;
mod sleep;
mod summary;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;
use vitality_core::errors::{AppError, AppResult};
use vitality_core::models::{
    DietEntry, DomainTrends, ExerciseEntry, HealthGrade, HealthReport, HealthTrend, Period,
    SleepEntry, TrendBasis,
};
use vitality_core::store::ReportStore;

use crate::config::HealthScoringConfig;
use crate::statistics::{truncate_score, weighted_sum};

/// Records for one user, already filtered to the analysis period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthRecords {
    /// Sleep entries ordered by date
    #[serde(default)]
    pub sleep: Vec<SleepEntry>,
    /// Exercise entries ordered by date
    #[serde(default)]
    pub exercise: Vec<ExerciseEntry>,
    /// Diet entries ordered by date then meal
    #[serde(default)]
    pub diet: Vec<DietEntry>,
}

impl HealthRecords {
    /// Bundle three record collections
    #[must_use]
    pub const fn new(
        sleep: Vec<SleepEntry>,
        exercise: Vec<ExerciseEntry>,
        diet: Vec<DietEntry>,
    ) -> Self {
        Self {
            sleep,
            exercise,
            diet,
        }
    }

    /// Whether no records of any kind are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sleep.is_empty() && self.exercise.is_empty() && self.diet.is_empty()
    }
}

/// Sub-scores and overall score of one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Sleep score (0-100)
    pub sleep: u8,
    /// Exercise score (0-100)
    pub exercise: u8,
    /// Diet score (0-100)
    pub diet: u8,
    /// Weighted overall score (0-100)
    pub overall: u8,
}

/// Overall and per-domain trends with the evidence they rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendAssessment {
    /// Overall score trend
    pub overall: HealthTrend,
    /// Whether a previous report was available
    pub basis: TrendBasis,
    /// Sub-score trends
    pub domains: DomainTrends,
}

/// Scores one user's health over one period
#[derive(Debug, Clone, Copy)]
pub struct HealthAnalyzer<'a> {
    user_id: Uuid,
    period: Period,
    records: &'a HealthRecords,
    config: &'a HealthScoringConfig,
}

impl<'a> HealthAnalyzer<'a> {
    /// Create an analyzer over records already scoped to `period`
    #[must_use]
    pub const fn new(
        user_id: Uuid,
        period: Period,
        records: &'a HealthRecords,
        config: &'a HealthScoringConfig,
    ) -> Self {
        Self {
            user_id,
            period,
            records,
            config,
        }
    }

    /// User being analyzed
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Period being analyzed
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Weighted overall score from three sub-scores, truncated toward zero
    #[must_use]
    pub fn calculate_overall_score(&self, sleep: u8, exercise: u8, diet: u8) -> u8 {
        truncate_score(self.raw_overall_score(sleep, exercise, diet))
    }

    fn raw_overall_score(&self, sleep: u8, exercise: u8, diet: u8) -> f64 {
        let weights = &self.config.overall;
        weighted_sum(&[
            (f64::from(sleep), weights.sleep_weight),
            (f64::from(exercise), weights.exercise_weight),
            (f64::from(diet), weights.diet_weight),
        ])
    }

    /// All four scores
    ///
    /// # Errors
    ///
    /// Returns `ReportUnavailable` when any intermediate score is not a
    /// finite number, which only happens with a corrupted configuration
    pub fn calculate_scores(&self) -> AppResult<ScoreCard> {
        let sleep = checked_score("sleep", self.raw_sleep_score())?;
        let exercise = checked_score("exercise", self.raw_exercise_score())?;
        let diet = checked_score("diet", self.raw_diet_score())?;
        let overall = checked_score("overall", self.raw_overall_score(sleep, exercise, diet))?;
        Ok(ScoreCard {
            sleep,
            exercise,
            diet,
            overall,
        })
    }

    /// Letter grade for an overall score
    ///
    /// Thresholds are inclusive lower bounds, so the grades partition `0..=100`.
    #[must_use]
    pub fn classify_grade(score: u8, config: &HealthScoringConfig) -> HealthGrade {
        let thresholds = &config.overall.grade_thresholds;
        if score >= thresholds.a_min {
            HealthGrade::A
        } else if score >= thresholds.b_min {
            HealthGrade::B
        } else if score >= thresholds.c_min {
            HealthGrade::C
        } else if score >= thresholds.d_min {
            HealthGrade::D
        } else {
            HealthGrade::F
        }
    }

    /// Trends against the previous period's report, or the absolute-score
    /// heuristic when there is none
    #[must_use]
    pub fn determine_health_trend(
        &self,
        scores: &ScoreCard,
        previous: Option<&HealthReport>,
    ) -> TrendAssessment {
        let delta = self.config.trend.score_delta;
        match previous {
            Some(previous) => TrendAssessment {
                overall: compare_scores(scores.overall, previous.overall_score, delta),
                basis: TrendBasis::PreviousPeriod,
                domains: DomainTrends {
                    sleep: compare_scores(scores.sleep, previous.sleep_score, delta),
                    exercise: compare_scores(scores.exercise, previous.exercise_score, delta),
                    diet: compare_scores(scores.diet, previous.diet_score, delta),
                },
            },
            None => TrendAssessment {
                overall: self.absolute_score_trend(scores.overall),
                basis: TrendBasis::AbsoluteScore,
                domains: DomainTrends {
                    sleep: HealthTrend::Stable,
                    exercise: HealthTrend::Stable,
                    diet: HealthTrend::Stable,
                },
            },
        }
    }

    fn absolute_score_trend(&self, overall: u8) -> HealthTrend {
        let trend = &self.config.trend;
        if overall >= trend.fallback_stable_min {
            HealthTrend::Stable
        } else if overall >= trend.fallback_improving_min {
            HealthTrend::Improving
        } else {
            HealthTrend::Declining
        }
    }

    /// Stored report for the immediately preceding period, if one can be read
    ///
    /// Lookup failures are logged and treated as "no history".
    pub fn find_previous_report(&self, reports: &dyn ReportStore) -> Option<HealthReport> {
        let previous_period = match self.period.previous() {
            Ok(period) => period,
            Err(e) => {
                warn!(user_id = %self.user_id, "Cannot compute previous period: {e}");
                return None;
            }
        };

        match reports.fetch_report_for_period(
            self.user_id,
            previous_period.start,
            previous_period.end,
        ) {
            Ok(report) => report,
            Err(e) => {
                warn!(
                    user_id = %self.user_id,
                    "Previous report lookup failed: {e}, falling back to absolute score trend"
                );
                None
            }
        }
    }

    /// Full report, resolving the trend through `reports`
    ///
    /// # Errors
    ///
    /// Returns `ReportUnavailable` if the report cannot be assembled. A failing
    /// previous-report lookup is not an error.
    pub fn generate_comprehensive_report(
        &self,
        reports: &dyn ReportStore,
    ) -> AppResult<HealthReport> {
        let previous = self.find_previous_report(reports);
        self.build_report(previous.as_ref())
    }

    /// Full report against an already resolved previous report
    ///
    /// # Errors
    ///
    /// Returns `ReportUnavailable` if any score is not a finite number
    pub fn build_report(&self, previous: Option<&HealthReport>) -> AppResult<HealthReport> {
        let scores = self.calculate_scores().map_err(|e| e.with_user_id(self.user_id))?;
        let trend = self.determine_health_trend(&scores, previous);
        let health_grade = Self::classify_grade(scores.overall, self.config);

        debug!(
            user_id = %self.user_id,
            overall = scores.overall,
            grade = %health_grade,
            "Assembled health report for {}",
            self.period
        );

        Ok(HealthReport {
            user_id: self.user_id,
            period: self.period,
            generated_at: Utc::now(),
            overall_score: scores.overall,
            sleep_score: scores.sleep,
            exercise_score: scores.exercise,
            diet_score: scores.diet,
            health_grade,
            health_trend: trend.overall,
            trend_basis: trend.basis,
            domain_trends: trend.domains,
            key_insights: self.generate_key_insights(),
            recommendations: self.generate_recommendations(&scores),
            data_summary: self.generate_data_summary(),
            detailed_analysis: self.generate_detailed_analysis(),
        })
    }
}

fn compare_scores(current: u8, previous: u8, delta: i16) -> HealthTrend {
    let change = i16::from(current) - i16::from(previous);
    if change > delta {
        HealthTrend::Improving
    } else if change < -delta {
        HealthTrend::Declining
    } else {
        HealthTrend::Stable
    }
}

fn checked_score(domain: &'static str, raw: f64) -> AppResult<u8> {
    if raw.is_finite() {
        Ok(truncate_score(raw))
    } else {
        Err(AppError::report_unavailable(format!(
            "{domain} score is not a finite number"
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vitality_core::models::ExerciseType;

    #[test]
    fn test_health_records_is_empty_checks_every_collection() {
        let mut records = HealthRecords::default();
        assert!(records.is_empty());

        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        records
            .exercise
            .push(ExerciseEntry::new(date, ExerciseType::Hiking, 90, None));
        assert!(!records.is_empty());
    }

    #[test]
    fn test_compare_scores_uses_strict_delta() {
        assert_eq!(compare_scores(80, 74, 5), HealthTrend::Improving);
        assert_eq!(compare_scores(80, 75, 5), HealthTrend::Stable);
        assert_eq!(compare_scores(70, 75, 5), HealthTrend::Stable);
        assert_eq!(compare_scores(69, 75, 5), HealthTrend::Declining);
    }

    #[test]
    fn test_checked_score_rejects_nan() {
        assert!(checked_score("sleep", f64::NAN).is_err());
        assert_eq!(checked_score("sleep", 87.9).unwrap(), 87);
    }
}
