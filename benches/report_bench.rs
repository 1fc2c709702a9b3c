// ABOUTME: Criterion benchmarks for health scoring and report generation
// ABOUTME: Measures sub-score calculation, full report assembly and parallel batch generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Criterion benchmarks for the health analyzer.
//!
//! Measures sub-score calculations, full report assembly over growing
//! periods, and batch generation through the report service.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use uuid::Uuid;
use vitality::services::ReportService;
use vitality::store::InMemoryHealthStore;
use vitality_core::models::{
    DietEntry, ExerciseEntry, ExerciseType, MealType, Period, SleepEntry,
};
use vitality_core::store::ReportStore;
use vitality_intelligence::{HealthAnalyzer, HealthRecords, HealthScoringConfig};

/// Period lengths covered by the benchmarks
const PERIODS: [u32; 3] = [7, 30, 90];

/// Users in the batch benchmark
const BATCH_USERS: usize = 64;

const EXERCISE_ROTATION: [ExerciseType; 5] = [
    ExerciseType::Running,
    ExerciseType::Cycling,
    ExerciseType::Swimming,
    ExerciseType::Yoga,
    ExerciseType::StrengthTraining,
];

const FOODS: [&str; 12] = [
    "oatmeal", "boiled egg", "rice", "noodles", "chicken breast", "tofu", "salmon", "broccoli",
    "spinach", "apple", "banana", "yogurt",
];

fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

/// Realistic records for `days` days ending on [`end_date`]
#[allow(clippy::cast_possible_truncation)]
fn generate_records(days: u32) -> HealthRecords {
    let end = end_date();
    let mut records = HealthRecords::default();

    for index in 0..days {
        let date = end - Duration::days(i64::from(index));
        let jitter = (index * 17) % 45;
        let bedtime = NaiveTime::from_hms_opt(22 + (index % 2), jitter, 0).unwrap_or_default();
        let wake =
            NaiveTime::from_hms_opt(6 + (index % 2), (jitter * 3) % 60, 0).unwrap_or_default();
        records.sleep.push(SleepEntry::new(date, bedtime, wake));

        if index % 3 != 2 {
            let kind = EXERCISE_ROTATION[index as usize % EXERCISE_ROTATION.len()];
            let calories = (index % 2 == 0).then_some(250 + (index * 13) % 200);
            records
                .exercise
                .push(ExerciseEntry::new(date, kind, 30 + (index * 7) % 40, calories));
        }

        for (slot, meal) in MealType::ALL.into_iter().enumerate() {
            let food = FOODS[(index as usize + slot * 5) % FOODS.len()];
            let portion = 150.0 + f64::from((index * 31 + slot as u32 * 11) % 200);
            records
                .diet
                .push(DietEntry::new(date, meal, food, portion, 120.0 + slot as f64 * 40.0));
        }
    }

    records.sleep.reverse();
    records.exercise.reverse();
    records.diet.reverse();
    records
}

fn bench_sub_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub_scores");
    let config = HealthScoringConfig::default();

    for days in PERIODS {
        let records = generate_records(days);
        let Ok(period) = Period::ending_on(end_date(), days) else {
            continue;
        };
        let analyzer = HealthAnalyzer::new(Uuid::nil(), period, &records, &config);

        group.bench_function(BenchmarkId::new("sleep_score", days), |b| {
            b.iter(|| black_box(&analyzer).calculate_sleep_score());
        });
        group.bench_function(BenchmarkId::new("exercise_score", days), |b| {
            b.iter(|| black_box(&analyzer).calculate_exercise_score());
        });
        group.bench_function(BenchmarkId::new("diet_score", days), |b| {
            b.iter(|| black_box(&analyzer).calculate_diet_score());
        });
    }

    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    let config = HealthScoringConfig::default();
    let history = InMemoryHealthStore::new();

    for days in PERIODS {
        let records = generate_records(days);
        let Ok(period) = Period::ending_on(end_date(), days) else {
            continue;
        };
        let entries = records.sleep.len() + records.exercise.len() + records.diet.len();
        group.throughput(Throughput::Elements(entries as u64));

        group.bench_with_input(BenchmarkId::new("generate", days), &records, |b, records| {
            let analyzer = HealthAnalyzer::new(Uuid::nil(), period, records, &config);
            b.iter(|| {
                analyzer
                    .generate_comprehensive_report(black_box(&history as &dyn ReportStore))
                    .map(|report| report.overall_score)
            });
        });
    }

    group.finish();
}

fn bench_batch_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_generation");
    let store = Arc::new(InMemoryHealthStore::new());
    let users: Vec<Uuid> = (0..BATCH_USERS).map(|_| Uuid::new_v4()).collect();
    for user_id in &users {
        store.import_records(*user_id, generate_records(30));
    }
    let service = ReportService::new(store.clone(), store, HealthScoringConfig::default());

    group.throughput(Throughput::Elements(BATCH_USERS as u64));
    group.bench_function("generate_reports_for_users", |b| {
        b.iter(|| service.generate_reports_for_users(black_box(&users), 30, end_date()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sub_scores,
    bench_full_report,
    bench_batch_generation
);
criterion_main!(benches);
