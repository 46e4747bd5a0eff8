// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! assess_batch — CLI batch evaluator for rebound-hammer surveys
//!
//! Reads a table of test locations, runs every row through the strength
//! estimator independently, and writes a result table that opens cleanly in
//! spreadsheet tools (UTF-8 with BOM).
//!
//! Usage:
//!   assess_batch --csv <input.csv> [--output <results.csv>] [--config <config.json>]
//!
//! Input header: location,angle,age_days,design_fck,readings
//!   readings is a quoted field of values separated by spaces or commas;
//!   a blank design_fck uses the configured default (24 MPa).

use log::{info, warn};
use std::env;
use std::fs::{self, File};
use std::io::BufWriter;
use std::process;

use condition_core::assessment_kernel::AssessmentKernel;
use condition_core::config::AssessmentConfig;
use condition_core::ingest::{read_batch_csv, BatchRow, RejectedRow};

/// Malformed records come back as `RejectedRow`s; only an unreadable file fails.
fn load_rows(path: &str) -> Result<Vec<Result<BatchRow, RejectedRow>>, csv::Error> {
    read_batch_csv(File::open(path)?)
}

fn load_config(path: Option<&str>) -> AssessmentConfig {
    let Some(path) = path else {
        return AssessmentConfig::default();
    };
    match fs::read_to_string(path).map(|text| AssessmentConfig::from_json(&text)) {
        Ok(Ok(cfg)) => cfg,
        Ok(Err(e)) => {
            eprintln!("ERROR: Invalid config {}: {}", path, e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("ERROR: Cannot read config {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut csv_path: Option<&str> = None;
    let mut output_path = "assessment_output.csv";
    let mut config_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].as_str());
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = &args[i];
                }
            }
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(args[i].as_str());
                }
            }
            other => warn!("Ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    let Some(csv_path) = csv_path else {
        eprintln!("Usage: assess_batch --csv <input.csv> [--output <results.csv>] [--config <config.json>]");
        process::exit(2);
    };

    let config = load_config(config_path);
    let rows = match load_rows(csv_path) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}: {}", csv_path, e);
            process::exit(1);
        }
    };
    let rejected = rows.iter().filter(|r| r.is_err()).count();
    info!(
        "Loaded {} rows from {} ({} rejected)",
        rows.len(),
        csv_path,
        rejected
    );

    let report = AssessmentKernel::evaluate_batch_records(&rows, &config);

    let file = match File::create(output_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("ERROR: Cannot create {}: {}", output_path, e);
            process::exit(1);
        }
    };
    if let Err(e) = AssessmentKernel::write_export(BufWriter::new(file), &report.outcomes) {
        eprintln!("ERROR: Export failed: {}", e);
        process::exit(1);
    }

    let ok = report.outcomes.iter().filter(|o| o.result.is_ok()).count();
    println!(
        "Evaluated {} rows ({} ok, {} failed) in {:.2} ms",
        report.outcomes.len(),
        ok,
        report.outcomes.len() - ok,
        report.compute_time_ms
    );
    if let Some(s) = &report.summary {
        println!(
            "  mean {:.1} MPa | std {:.2} | CV {:.1}% | min {:.1} | max {:.1} | below {:.0} MPa: {}",
            s.mean,
            s.std_dev,
            s.cv,
            s.min,
            s.max,
            config.default_design_fck,
            s.below_threshold.unwrap_or(0)
        );
    }
    println!("Export complete: {}", output_path);
}
