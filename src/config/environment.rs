// ABOUTME: Environment configuration for the report service and command line tools
// ABOUTME: Reads the default report period and loads the validated scoring configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Environment-based configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info};
use vitality_core::constants::env_vars;
use vitality_core::errors::AppError;
use vitality_intelligence::HealthScoringConfig;

/// Report period used when a caller does not choose one
pub const DEFAULT_PERIOD_DAYS: u32 = 7;

/// Engine-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Report period length in days when none is requested
    pub default_period_days: u32,
    /// Scoring weights and thresholds
    pub scoring: HealthScoringConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_period_days: DEFAULT_PERIOD_DAYS,
            scoring: HealthScoringConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables and an optional `.env` file
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed. A zero default period
    /// carries an `AppError` with `ValueOutOfRange` and an invalid scoring
    /// configuration one with `ConfigInvalid`
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let default_period_days: u32 = env_var_or(
            env_vars::DEFAULT_PERIOD_DAYS,
            &DEFAULT_PERIOD_DAYS.to_string(),
        )
        .trim()
        .parse()
        .with_context(|| format!("Invalid {} value", env_vars::DEFAULT_PERIOD_DAYS))?;

        if default_period_days == 0 {
            return Err(AppError::out_of_range(format!(
                "{} must be at least 1",
                env_vars::DEFAULT_PERIOD_DAYS
            ))
            .into());
        }

        let scoring = HealthScoringConfig::load()
            .map_err(AppError::from)
            .context("Invalid health scoring configuration")?;

        Ok(Self {
            default_period_days,
            scoring,
        })
    }
}

/// Environment variable with a fallback
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
