// ABOUTME: Command line tool generating a health report from a JSON dataset
// ABOUTME: Loads one user's records, scores the trailing period and prints the report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence
//!
//! Usage:
//! ```bash
//! # Report for the 7 days ending today
//! vitality-report --dataset data/alice.json
//!
//! # Report for a fixed 14-day window, compact output
//! vitality-report --dataset data/alice.json --as-of 2025-03-14 --days 14 --compact
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing::info;
use uuid::Uuid;
use vitality::config::EngineConfig;
use vitality::dataset::HealthDataset;
use vitality::logging::LoggingConfig;
use vitality::services::ReportService;

#[derive(Parser)]
#[command(
    name = "vitality-report",
    about = "Generate a health report from a JSON dataset",
    long_about = "Scores logged sleep, exercise and diet over a trailing period and prints the health report as JSON."
)]
struct Cli {
    /// Dataset file with sleep, exercise, diet and reports sections
    #[arg(long, short = 'd')]
    dataset: PathBuf,

    /// User the dataset belongs to (defaults to the nil UUID)
    #[arg(long)]
    user: Option<Uuid>,

    /// Last day of the period, YYYY-MM-DD (defaults to today in UTC)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Period length in days (defaults to VITALITY_DEFAULT_PERIOD_DAYS or 7)
    #[arg(long)]
    days: Option<u32>,

    /// Print the report on a single line
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = EngineConfig::from_env()?;
    let user_id = cli.user.unwrap_or_else(Uuid::nil);
    let period_days = cli.days.unwrap_or(config.default_period_days);
    let today = cli.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let store = Arc::new(
        HealthDataset::from_path(&cli.dataset)
            .and_then(|dataset| dataset.into_store(user_id))
            .with_context(|| format!("Failed to load dataset {}", cli.dataset.display()))?,
    );

    info!(user.id = %user_id, report.period_days = period_days, "Generating report as of {today}");
    let service = ReportService::new(store.clone(), store, config.scoring);
    let report = service
        .generate_report_as_of(user_id, period_days, today)
        .context("Failed to generate health report")?;

    let mut stdout = io::stdout().lock();
    if cli.compact {
        serde_json::to_writer(&mut stdout, &report)?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
    }
    writeln!(stdout)?;
    Ok(())
}
