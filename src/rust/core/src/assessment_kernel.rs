// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// AssessmentKernel: single entry point for the presentation layer.
//
// The browser UI calls ONLY this module (through WASM), never the individual
// engines. Native binaries use the pure Rust half below.

use crate::config::AssessmentConfig;
use crate::error::AssessmentError;
use crate::ingest::{parse_readings, BatchRow, RejectedRow};
use crate::science::carbonation::{CarbonationAssessor, CarbonationReport};
use crate::science::statistics::{StatisticsEngine, StatisticsSummary};
use crate::science::strength::{StrengthEstimator, StrengthGrade, StrengthReport};
use log::warn;
use serde::{Deserialize, Serialize};
use std::io;
use wasm_bindgen::prelude::*;

/// UTF-8 byte-order mark, so spreadsheet tools pick the right encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: String, // 'INFO', 'WARNING', 'CRITICAL'
}

impl ValidationEvent {
    fn new(topic: &str, severity: &str, message: String) -> Self {
        ValidationEvent {
            topic: topic.to_string(),
            message,
            severity: severity.to_string(),
        }
    }
}

/// Success flag plus reason, as handed to the presentation layer.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    pub reason: Option<String>,
    pub error: Option<AssessmentError>,
    pub result: Option<T>,
    pub events: Vec<ValidationEvent>,
}

impl<T: Serialize> Envelope<T> {
    pub fn from_result(result: Result<T, AssessmentError>, events: Vec<ValidationEvent>) -> Self {
        match result {
            Ok(value) => Envelope {
                ok: true,
                reason: None,
                error: None,
                result: Some(value),
                events,
            },
            Err(e) => Envelope {
                ok: false,
                reason: Some(e.to_string()),
                error: Some(e),
                result: None,
                events,
            },
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub location: String,
    /// None when the record itself could not be read.
    pub angle: Option<i32>,
    pub age_days: Option<f64>,
    pub design_fck: f64,
    pub result: Result<StrengthReport, AssessmentError>,
}

#[derive(Clone, Debug, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
    /// Over successful rows' mean strengths; None below two successes.
    pub summary: Option<StatisticsSummary>,
    pub compute_time_ms: f32,
}

/// Flat export record, one per batch row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportRow {
    pub location: String,
    pub angle: Option<i32>,
    pub age_days: Option<f64>,
    pub design_fck: f64,
    pub status: String,
    pub reason: String,
    pub raw_mean: Option<f64>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub r_avg: Option<f64>,
    pub r0: Option<f64>,
    pub age_coeff: Option<f64>,
    pub discarded: Option<usize>,
    pub excluded: String,
    pub f_aij: Option<f64>,
    pub f_jsms: Option<f64>,
    pub f_mst: Option<f64>,
    pub f_kwon: Option<f64>,
    pub f_kalis: Option<f64>,
    pub mean_strength: Option<f64>,
    pub ratio: Option<f64>,
    pub grade: String,
}

impl From<&BatchOutcome> for ExportRow {
    fn from(outcome: &BatchOutcome) -> Self {
        let mut row = ExportRow {
            location: outcome.location.clone(),
            angle: outcome.angle,
            age_days: outcome.age_days,
            design_fck: outcome.design_fck,
            status: String::new(),
            reason: String::new(),
            raw_mean: None,
            lower_bound: None,
            upper_bound: None,
            r_avg: None,
            r0: None,
            age_coeff: None,
            discarded: None,
            excluded: String::new(),
            f_aij: None,
            f_jsms: None,
            f_mst: None,
            f_kwon: None,
            f_kalis: None,
            mean_strength: None,
            ratio: None,
            grade: String::new(),
        };
        match &outcome.result {
            Ok(r) => {
                row.status = "OK".to_string();
                row.raw_mean = Some(round2(r.raw_mean));
                row.lower_bound = Some(round2(r.lower_bound));
                row.upper_bound = Some(round2(r.upper_bound));
                row.r_avg = Some(round2(r.r_avg));
                row.r0 = Some(round2(r.r0));
                row.age_coeff = Some(round3(r.age_coeff));
                row.discarded = Some(r.discard_count);
                row.excluded = r
                    .excluded
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                row.f_aij = Some(round2(r.estimates.aij));
                row.f_jsms = Some(round2(r.estimates.jsms));
                row.f_mst = Some(round2(r.estimates.mst));
                row.f_kwon = Some(round2(r.estimates.kwon));
                row.f_kalis = Some(round2(r.estimates.kalis));
                row.mean_strength = Some(round2(r.mean_strength));
                row.ratio = Some(round2(r.ratio));
                row.grade = r.grade.to_string();
            }
            Err(e) => {
                row.status = e.code().to_string();
                row.reason = e.to_string();
            }
        }
        row
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[wasm_bindgen]
pub struct AssessmentKernel;

#[wasm_bindgen]
impl AssessmentKernel {
    /// Rebound-hammer evaluation from pasted reading text.
    ///
    /// # Returns
    /// JSON envelope `{ ok, reason, error, result, events }`, where `result`
    /// is the full strength record.
    #[wasm_bindgen]
    pub fn evaluate_rebound_json(
        readings_text: &str,
        angle_deg: i32,
        age_days: f64,
        design_fck: f64,
    ) -> String {
        let config = AssessmentConfig::default();
        let (result, events) =
            Self::evaluate_rebound_text(readings_text, angle_deg, age_days, design_fck, &config);
        Envelope::from_result(result, events).to_json()
    }

    /// Same as `evaluate_rebound_json`, returned as a JS object.
    pub fn evaluate_rebound_value(
        readings_text: &str,
        angle_deg: i32,
        age_days: f64,
        design_fck: f64,
    ) -> Result<JsValue, JsValue> {
        let config = AssessmentConfig::default();
        let (result, events) =
            Self::evaluate_rebound_text(readings_text, angle_deg, age_days, design_fck, &config);
        Ok(serde_wasm_bindgen::to_value(&Envelope::from_result(result, events))?)
    }

    #[wasm_bindgen]
    pub fn assess_carbonation_json(measured_depth: f64, design_cover: f64, age_years: f64) -> String {
        let (report, events) = Self::assess_carbonation(measured_depth, design_cover, age_years);
        Envelope::from_result(Ok(report), events).to_json()
    }

    /// Descriptive statistics over a JSON array of numbers.
    #[wasm_bindgen]
    pub fn summarize_json(values_json: &str, threshold: Option<f64>) -> String {
        let values: Vec<f64> = match serde_json::from_str(values_json) {
            Ok(v) => v,
            Err(e) => {
                return serde_json::to_string(&serde_json::json!({
                    "ok": false,
                    "reason": format!("Failed to parse values: {}", e)
                }))
                .unwrap_or_default();
            }
        };
        Envelope::from_result(StatisticsEngine::summarize(&values, threshold), Vec::new()).to_json()
    }

    /// Batch evaluation of a JSON array of rows.
    #[wasm_bindgen]
    pub fn evaluate_batch_json(rows_json: &str) -> String {
        let rows: Vec<BatchRow> = match serde_json::from_str(rows_json) {
            Ok(r) => r,
            Err(e) => {
                return serde_json::to_string(&serde_json::json!({
                    "error": format!("Failed to parse batch rows: {}", e)
                }))
                .unwrap_or_default();
            }
        };
        let report = Self::evaluate_batch(&rows, &AssessmentConfig::default());
        serde_json::to_string(&report).unwrap_or_default()
    }
}

/// Pure Rust Implementation (Non-WASM-Bindgen)
impl AssessmentKernel {
    pub fn evaluate_rebound(
        readings: &[f64],
        angle_deg: i32,
        age_days: f64,
        design_fck: f64,
        config: &AssessmentConfig,
    ) -> (Result<StrengthReport, AssessmentError>, Vec<ValidationEvent>) {
        let mut events = Vec::new();

        if readings.len() < config.standard_series {
            warn!(
                "Rebound series has {} readings (standard series is {})",
                readings.len(),
                config.standard_series
            );
            events.push(ValidationEvent::new(
                "REBOUND.SERIES",
                "WARNING",
                format!(
                    "Only {} readings supplied (KS F 2730 calls for {})",
                    readings.len(),
                    config.standard_series
                ),
            ));
        }

        let result =
            StrengthEstimator::new(config).estimate(readings, angle_deg, age_days, design_fck);

        if let Ok(report) = &result {
            if report.discard_count > 0 {
                events.push(ValidationEvent::new(
                    "REBOUND.OUTLIERS",
                    "INFO",
                    format!(
                        "{} outlier(s) excluded from the mean: {:?}",
                        report.discard_count, report.excluded
                    ),
                ));
            }
            if report.grade == StrengthGrade::DE {
                events.push(ValidationEvent::new(
                    "REBOUND.STRENGTH",
                    "CRITICAL",
                    format!(
                        "Estimated {:.1} MPa is {:.0}% of design strength {:.1} MPa",
                        report.mean_strength, report.ratio, report.design_fck
                    ),
                ));
            }
        }

        (result, events)
    }

    pub fn evaluate_rebound_text(
        readings_text: &str,
        angle_deg: i32,
        age_days: f64,
        design_fck: f64,
        config: &AssessmentConfig,
    ) -> (Result<StrengthReport, AssessmentError>, Vec<ValidationEvent>) {
        match parse_readings(readings_text) {
            Ok(readings) => {
                Self::evaluate_rebound(&readings, angle_deg, age_days, design_fck, config)
            }
            Err(e) => (Err(e), Vec::new()),
        }
    }

    pub fn assess_carbonation(
        measured_depth: f64,
        design_cover: f64,
        age_years: f64,
    ) -> (CarbonationReport, Vec<ValidationEvent>) {
        let report = CarbonationAssessor::assess(measured_depth, design_cover, age_years);
        let mut events = Vec::new();

        if report.hazard {
            events.push(ValidationEvent::new(
                "CARBONATION.COVER",
                "CRITICAL",
                format!(
                    "Carbonation front ({:.1} mm) has reached the reinforcement cover ({:.1} mm); \
                     corrosion likely, detailed inspection required",
                    measured_depth, design_cover
                ),
            ));
        }

        (report, events)
    }

    /// Evaluate every row independently. A failing row never affects another.
    pub fn evaluate_batch(rows: &[BatchRow], config: &AssessmentConfig) -> BatchReport {
        let start = instant::Instant::now();
        let outcomes = rows.iter().map(|row| Self::evaluate_row(row, config)).collect();
        Self::finish_batch(outcomes, config, start)
    }

    /// Batch evaluation over records read by `ingest::read_batch_csv`.
    /// Rejected records are reported as failed outcomes in their place.
    pub fn evaluate_batch_records(
        records: &[Result<BatchRow, RejectedRow>],
        config: &AssessmentConfig,
    ) -> BatchReport {
        let start = instant::Instant::now();
        let outcomes = records
            .iter()
            .map(|record| match record {
                Ok(row) => Self::evaluate_row(row, config),
                Err(rejected) => BatchOutcome {
                    location: rejected.location.clone(),
                    angle: None,
                    age_days: None,
                    design_fck: config.default_design_fck,
                    result: Err(rejected.error.clone()),
                },
            })
            .collect();
        Self::finish_batch(outcomes, config, start)
    }

    fn evaluate_row(row: &BatchRow, config: &AssessmentConfig) -> BatchOutcome {
        let design_fck = row.design_fck.unwrap_or(config.default_design_fck);
        let result = parse_readings(&row.readings).and_then(|readings| {
            StrengthEstimator::new(config).estimate(&readings, row.angle, row.age_days, design_fck)
        });
        if let Err(e) = &result {
            warn!("Batch row '{}' failed: {}", row.location, e);
        }
        BatchOutcome {
            location: row.location.clone(),
            angle: Some(row.angle),
            age_days: Some(row.age_days),
            design_fck,
            result,
        }
    }

    fn finish_batch(
        outcomes: Vec<BatchOutcome>,
        config: &AssessmentConfig,
        start: instant::Instant,
    ) -> BatchReport {
        let strengths: Vec<f64> = outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| r.mean_strength))
            .collect();
        let summary = StatisticsEngine::summarize(&strengths, Some(config.default_design_fck)).ok();

        BatchReport {
            outcomes,
            summary,
            compute_time_ms: start.elapsed().as_secs_f32() * 1000.0,
        }
    }

    /// Write outcomes as a BOM-prefixed CSV table.
    pub fn write_export<W: io::Write>(
        mut writer: W,
        outcomes: &[BatchOutcome],
    ) -> Result<(), csv::Error> {
        writer.write_all(UTF8_BOM)?;
        let mut wtr = csv::Writer::from_writer(writer);
        for outcome in outcomes {
            wtr.serialize(ExportRow::from(outcome))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
