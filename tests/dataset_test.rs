// ABOUTME: Tests for loading JSON health datasets into the in-memory store
// ABOUTME: Covers file parsing, missing sections, stored history and unreadable input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Duration;
use common::{day, healthy_records, today};
use tempfile::TempDir;
use uuid::Uuid;
use vitality::dataset::HealthDataset;
use vitality::services::ReportService;
use vitality_core::errors::ErrorCode;
use vitality_core::models::{ExerciseType, HealthTrend, MealType, TrendBasis};
use vitality_core::store::HealthRecordSource;
use vitality_intelligence::HealthScoringConfig;

const SMALL_DATASET: &str = r#"{
    "sleep": [
        {"date": "2025-03-06", "bedtime": "23:30:00", "wake_time": "07:00:00"},
        {"date": "2025-03-07", "bedtime": "23:00:00", "wake_time": "06:30:00"}
    ],
    "exercise": [
        {"date": "2025-03-06", "exercise_type": "jump_rope", "duration_minutes": 20},
        {"date": "2025-03-07", "exercise_type": "running", "duration_minutes": 30, "calories_burned": 320}
    ],
    "diet": [
        {"date": "2025-03-07", "meal_type": "breakfast", "food_name": "oatmeal",
         "portion_grams": 80.0, "calories_per_100g": 380.0}
    ]
}"#;

fn write_dataset(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("dataset.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_dataset_file_loads_every_section() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SMALL_DATASET);

    let dataset = HealthDataset::from_path(&path).unwrap();
    assert_eq!(dataset.sleep.len(), 2);
    assert_eq!(dataset.exercise.len(), 2);
    assert_eq!(dataset.exercise[0].exercise_type, ExerciseType::JumpRope);
    assert_eq!(dataset.exercise[0].calories_burned, None);
    assert_eq!(dataset.diet[0].meal_type, MealType::Breakfast);
    assert!(dataset.reports.is_empty());
}

#[test]
fn test_dataset_sections_are_optional() {
    let dataset = HealthDataset::from_json(r#"{"sleep": []}"#).unwrap();
    assert!(dataset.exercise.is_empty());
    assert!(dataset.diet.is_empty());
}

#[test]
fn test_dataset_store_serves_records_by_date() {
    let user_id = Uuid::new_v4();
    let store = HealthDataset::from_json(SMALL_DATASET)
        .unwrap()
        .into_store(user_id)
        .unwrap();

    let sleep = store.fetch_sleep_entries(user_id, day(7), day(7)).unwrap();
    assert_eq!(sleep.len(), 1);
    assert_eq!(sleep[0].duration_minutes(), Some(450));
}

#[test]
fn test_dataset_history_feeds_trend() {
    let user_id = Uuid::new_v4();
    let config = HealthScoringConfig::default();

    // Previous week scored poorly
    let store = Arc::new(HealthDataset::default().into_store(user_id).unwrap());
    let previous = ReportService::new(store.clone(), store, config.clone())
        .generate_report_as_of(user_id, 7, today())
        .unwrap();

    let mut records = healthy_records();
    for entry in &mut records.sleep {
        entry.date += Duration::days(7);
    }
    let dataset = HealthDataset {
        sleep: records.sleep,
        reports: vec![previous],
        ..HealthDataset::default()
    };
    let json = serde_json::to_string(&dataset).unwrap();

    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, &json);
    let other_user = Uuid::new_v4();
    let store = Arc::new(
        HealthDataset::from_path(&path)
            .unwrap()
            .into_store(other_user)
            .unwrap(),
    );

    let report = ReportService::new(store.clone(), store, config)
        .generate_report_as_of(other_user, 7, day(14))
        .unwrap();
    assert_eq!(report.trend_basis, TrendBasis::PreviousPeriod);
    assert_eq!(report.health_trend, HealthTrend::Improving);
}

#[test]
fn test_missing_dataset_file_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let error = HealthDataset::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_malformed_dataset_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, r#"{"sleep": [{"date": "yesterday"}]}"#);

    let error = HealthDataset::from_path(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}
