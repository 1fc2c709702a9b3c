// ABOUTME: JSON dataset loader describing one user's logged records and stored reports
// ABOUTME: Feeds the in-memory store for the command line tool and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Health datasets
//!
//! A dataset is a JSON document holding one user's history:
//!
//! ```json
//! {
//!   "sleep": [{"date": "2025-03-01", "bedtime": "23:00:00", "wake_time": "07:00:00"}],
//!   "exercise": [],
//!   "diet": [],
//!   "reports": []
//! }
//! ```
//!
//! Every section is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use vitality_core::errors::{AppError, AppResult};
use vitality_core::models::{DietEntry, ExerciseEntry, HealthReport, SleepEntry};
use vitality_core::store::ReportStore;
use vitality_intelligence::HealthRecords;

use crate::store::InMemoryHealthStore;

/// One user's records and previously generated reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthDataset {
    /// Logged nights
    #[serde(default)]
    pub sleep: Vec<SleepEntry>,
    /// Logged exercise sessions
    #[serde(default)]
    pub exercise: Vec<ExerciseEntry>,
    /// Logged food items
    #[serde(default)]
    pub diet: Vec<DietEntry>,
    /// Reports from earlier periods, used for trend comparison
    #[serde(default)]
    pub reports: Vec<HealthReport>,
}

impl HealthDataset {
    /// Parse a dataset from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the text is not a valid dataset
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the file cannot be read and
    /// `SerializationError` if it is not a valid dataset
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!(
                "Cannot read dataset {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;
        let dataset = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            sleep = dataset.sleep.len(),
            exercise = dataset.exercise.len(),
            diet = dataset.diet.len(),
            reports = dataset.reports.len(),
            "Loaded health dataset"
        );
        Ok(dataset)
    }

    /// Load the dataset into a fresh store under `user_id`
    ///
    /// Stored reports are re-keyed to `user_id` since the dataset describes a
    /// single user.
    ///
    /// # Errors
    ///
    /// Returns an error if a report cannot be stored
    pub fn into_store(self, user_id: Uuid) -> AppResult<InMemoryHealthStore> {
        let store = InMemoryHealthStore::new();
        store.import_records(
            user_id,
            HealthRecords::new(self.sleep, self.exercise, self.diet),
        );
        for mut report in self.reports {
            report.user_id = user_id;
            store.save_report(&report)?;
        }
        Ok(store)
    }
}
