// ABOUTME: Domain service layer orchestrating record fetching, analysis and report persistence
// ABOUTME: Provides front-end agnostic services reusable by the CLI, tests and embedding callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Domain service layer
//!
//! Services wire the storage collaborators to the analyzer. They are
//! agnostic of how they are invoked, so the command line tool and any
//! embedding application apply the same rules.

/// Health report generation, persistence and batch evaluation
pub mod health_reports;

pub use health_reports::ReportService;
