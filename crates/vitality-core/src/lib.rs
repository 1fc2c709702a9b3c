// ABOUTME: Core types and constants for the Vitality health scoring engine
// ABOUTME: Foundation crate with error handling, domain models, and store traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

#![deny(unsafe_code)]

//! # Vitality Core
//!
//! Foundation crate providing shared types for the Vitality health scoring
//! engine. It changes infrequently so the analysis crate and the service layer
//! can build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service names and environment variable names
//! - **models**: Sleep, exercise and diet entries, periods, and the health report
//! - **store**: Collaborator traits for record and report persistence

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (entries, vocabularies, periods, reports)
pub mod models;

/// Record and report store collaborator traits
pub mod store;
