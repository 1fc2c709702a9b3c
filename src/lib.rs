// ABOUTME: Main library entry point for the Vitality health engine
// ABOUTME: Service layer, storage, configuration and logging around the health analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

#![deny(unsafe_code)]

//! # Vitality
//!
//! Scores a user's logged sleep, exercise and diet over a trailing period and
//! produces a [`HealthReport`](vitality_core::models::HealthReport) with a
//! grade, a trend against the previous period, insights and recommendations.
//!
//! ## Architecture
//!
//! - **vitality-core**: errors, domain models and store traits
//! - **vitality-intelligence**: the `HealthAnalyzer` scoring engine
//! - **services**: `ReportService` wiring stores to the analyzer
//! - **store**: in-memory record and report storage
//! - **dataset**: JSON dataset loading for the command line tool
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use vitality::services::ReportService;
//! use vitality::store::InMemoryHealthStore;
//! use vitality_intelligence::HealthScoringConfig;
//!
//! let store = Arc::new(InMemoryHealthStore::new());
//! let service = ReportService::new(store.clone(), store, HealthScoringConfig::default());
//! let report = service.generate_report(Uuid::new_v4(), 7)?;
//! println!("{} ({})", report.overall_score, report.health_grade);
//! # Ok::<(), vitality_core::errors::AppError>(())
//! ```

/// Environment configuration
pub mod config;

/// JSON health datasets
pub mod dataset;

/// Structured logging setup
pub mod logging;

/// Report generation services
pub mod services;

/// Record and report storage
pub mod store;
