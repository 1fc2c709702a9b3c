// ABOUTME: Configuration management module for the Vitality service layer
// ABOUTME: Re-exports environment configuration and the scoring configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Configuration module
//!
//! - **Environment**: Service settings read from environment variables
//! - **Scoring**: Re-exported from `vitality_intelligence::config`

/// Environment and service configuration
pub mod environment;

pub use environment::{EngineConfig, DEFAULT_PERIOD_DAYS};
pub use vitality_intelligence::config::{ConfigError, HealthScoringConfig};
