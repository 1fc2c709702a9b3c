// ABOUTME: Tests for logging configuration read from environment variables
// ABOUTME: Validates format selection, production defaults and service metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use vitality::logging::{LogFormat, LoggingConfig};

const LOGGING_VARS: [&str; 5] = [
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
];

fn clear_env() {
    for name in LOGGING_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_default_logging_is_pretty_development() {
    clear_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "vitality-engine");
    assert!(!config.include_location);
    assert!(!config.include_thread);
}

#[test]
#[serial]
fn test_log_format_selection() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);

    env::set_var("LOG_FORMAT", "compact");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    env::set_var("LOG_FORMAT", "fancy");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Pretty);
    clear_env();
}

#[test]
#[serial]
fn test_production_includes_location_and_thread() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "vitality-batch");

    let config = LoggingConfig::from_env();
    clear_env();

    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.service_name, "vitality-batch");
}
