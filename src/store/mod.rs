// ABOUTME: Storage backends for health records and generated reports
// ABOUTME: Re-exports the collaborator traits alongside the in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Record and report storage
//!
//! The analyzer only sees the [`HealthRecordSource`] and [`ReportStore`]
//! traits. [`InMemoryHealthStore`] backs the command line tool and tests.

/// Concurrent in-memory store
pub mod memory;

pub use memory::InMemoryHealthStore;
pub use vitality_core::store::{HealthRecordSource, ReportStore};
