// ABOUTME: Integration tests for the report service over the in-memory store
// ABOUTME: Validates period scoping, trend history, error mapping, persistence and batch generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use common::{
    day, healthy_records, init_test_logging, night, today, EmptyReportStore,
    UnavailableRecordSource, UnavailableReportStore,
};
use uuid::Uuid;
use vitality::services::ReportService;
use vitality::store::InMemoryHealthStore;
use vitality_core::errors::ErrorCode;
use vitality_core::models::{HealthTrend, Period, TrendBasis};
use vitality_core::store::ReportStore;
use vitality_intelligence::HealthScoringConfig;

fn service_with(store: &Arc<InMemoryHealthStore>) -> ReportService {
    ReportService::new(
        store.clone(),
        store.clone(),
        HealthScoringConfig::default(),
    )
}

#[test]
fn test_generate_report_for_healthy_week() {
    init_test_logging();
    let store = Arc::new(InMemoryHealthStore::new());
    let user_id = Uuid::new_v4();
    store.import_records(user_id, healthy_records());

    let report = service_with(&store)
        .generate_report_as_of(user_id, 7, today())
        .unwrap();

    assert_eq!(report.period.start, day(1));
    assert_eq!(report.period.end, day(7));
    assert_eq!(report.overall_score, 90);
    assert_eq!(report.trend_basis, TrendBasis::AbsoluteScore);
}

#[test]
fn test_records_outside_the_period_are_ignored() {
    let store = Arc::new(InMemoryHealthStore::new());
    let user_id = Uuid::new_v4();
    store.import_records(user_id, healthy_records());
    // Nights before the period and after "today"
    store.add_sleep_entry(user_id, night(20, 120));
    let mut early = night(1, 120);
    early.date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
    store.add_sleep_entry(user_id, early);

    let report = service_with(&store)
        .generate_report_as_of(user_id, 7, today())
        .unwrap();
    assert_eq!(report.data_summary.sleep_days, 7);
    assert_eq!(report.sleep_score, 99);
}

#[test]
fn test_other_users_do_not_leak_into_report() {
    let store = Arc::new(InMemoryHealthStore::new());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    store.import_records(alice, healthy_records());

    let report = service_with(&store)
        .generate_report_as_of(bob, 7, today())
        .unwrap();
    assert_eq!(report.overall_score, 0);
    assert_eq!(report.user_id, bob);
}

#[test]
fn test_zero_day_period_is_invalid_input() {
    let store = Arc::new(InMemoryHealthStore::new());
    let error = service_with(&store)
        .generate_report_as_of(Uuid::new_v4(), 0, today())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_failing_record_source_makes_report_unavailable() {
    init_test_logging();
    let user_id = Uuid::new_v4();
    let service = ReportService::new(
        Arc::new(UnavailableRecordSource),
        Arc::new(EmptyReportStore),
        HealthScoringConfig::default(),
    );

    let error = service
        .generate_report_as_of(user_id, 7, today())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ReportUnavailable);
    assert_eq!(error.context.user_id, Some(user_id));
    assert!(error.message.contains("exercise"));
    assert_eq!(error.context.details["record_kind"], "exercise");
    assert_eq!(error.context.details["period_start"], "2025-03-01");
    assert_eq!(error.context.details["period_end"], "2025-03-07");
}

#[test]
fn test_failing_report_store_falls_back_to_absolute_trend() {
    init_test_logging();
    let records = Arc::new(InMemoryHealthStore::new());
    let user_id = Uuid::new_v4();
    records.import_records(user_id, healthy_records());
    let service = ReportService::new(
        records,
        Arc::new(UnavailableReportStore),
        HealthScoringConfig::default(),
    );

    let report = service.generate_report_as_of(user_id, 7, today()).unwrap();
    assert_eq!(report.trend_basis, TrendBasis::AbsoluteScore);
    assert_eq!(report.health_trend, HealthTrend::Stable);
}

#[test]
fn test_save_failure_is_a_storage_error() {
    let records = Arc::new(InMemoryHealthStore::new());
    let service = ReportService::new(
        records,
        Arc::new(UnavailableReportStore),
        HealthScoringConfig::default(),
    );

    let error = service
        .generate_and_store_report(Uuid::new_v4(), 7, today())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_stored_report_drives_next_period_trend() {
    init_test_logging();
    let store = Arc::new(InMemoryHealthStore::new());
    let user_id = Uuid::new_v4();
    let service = service_with(&store);

    // Week one: nothing logged
    let first = service
        .generate_and_store_report(user_id, 7, day(7))
        .unwrap();
    assert_eq!(first.overall_score, 0);
    assert_eq!(store.report_count(user_id), 1);

    // Week two: a healthy week, shifted by seven days
    let mut records = healthy_records();
    for entry in &mut records.sleep {
        entry.date += Duration::days(7);
    }
    for entry in &mut records.exercise {
        entry.date += Duration::days(7);
    }
    for entry in &mut records.diet {
        entry.date += Duration::days(7);
    }
    store.import_records(user_id, records);

    let second = service
        .generate_and_store_report(user_id, 7, day(14))
        .unwrap();
    assert_eq!(second.trend_basis, TrendBasis::PreviousPeriod);
    assert_eq!(second.health_trend, HealthTrend::Improving);
    assert_eq!(second.domain_trends.sleep, HealthTrend::Improving);
    assert_eq!(store.report_count(user_id), 2);
}

#[test]
fn test_regenerating_a_period_replaces_stored_report() {
    let store = Arc::new(InMemoryHealthStore::new());
    let user_id = Uuid::new_v4();
    let service = service_with(&store);

    service
        .generate_and_store_report(user_id, 7, today())
        .unwrap();
    store.import_records(user_id, healthy_records());
    let latest = service
        .generate_and_store_report(user_id, 7, today())
        .unwrap();

    assert_eq!(store.report_count(user_id), 1);
    let period = Period::ending_on(today(), 7).unwrap();
    let stored = store
        .fetch_report_for_period(user_id, period.start, period.end)
        .unwrap()
        .unwrap();
    assert_eq!(stored.overall_score, latest.overall_score);
}

#[test]
fn test_batch_generation_returns_one_result_per_user_in_order() {
    init_test_logging();
    let store = Arc::new(InMemoryHealthStore::new());
    let users: Vec<Uuid> = (0..16).map(|_| Uuid::new_v4()).collect();
    for user_id in users.iter().step_by(2) {
        store.import_records(*user_id, healthy_records());
    }

    let results = service_with(&store).generate_reports_for_users(&users, 7, today());

    assert_eq!(results.len(), users.len());
    for (index, (user_id, result)) in results.iter().enumerate() {
        assert_eq!(*user_id, users[index]);
        let report = result.as_ref().unwrap();
        let expected = if index % 2 == 0 { 90 } else { 0 };
        assert_eq!(report.overall_score, expected);
    }
}

#[test]
fn test_batch_generation_isolates_failures() {
    let service = ReportService::new(
        Arc::new(UnavailableRecordSource),
        Arc::new(EmptyReportStore),
        HealthScoringConfig::default(),
    );
    let users = [Uuid::new_v4(), Uuid::new_v4()];

    let results = service.generate_reports_for_users(&users, 7, today());
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|(_, result)| result.as_ref().is_err_and(|e| e.code == ErrorCode::ReportUnavailable)));
}
