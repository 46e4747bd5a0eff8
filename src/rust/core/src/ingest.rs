// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Reading ingestion: turns pasted text and batch rows into engine inputs.

use crate::error::AssessmentError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::io;

/// Parse one token as a finite reading.
pub fn parse_token(token: &str, position: usize) -> Result<f64, AssessmentError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AssessmentError::ParseError {
            token: token.to_string(),
            position,
        }),
    }
}

/// Tokenize free text (whitespace, commas or newlines between values) into
/// a reading series. Positions in errors are 1-based token indices.
pub fn parse_readings(text: &str) -> Result<Vec<f64>, AssessmentError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(i, token)| parse_token(token, i + 1))
        .collect()
}

/// One row of a batch table.
///
/// CSV header: `location,angle,age_days,design_fck,readings`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub location: String,
    #[serde(default)]
    pub angle: i32,
    pub age_days: f64,
    /// Blank means the configured default.
    #[serde(default)]
    pub design_fck: Option<f64>,
    pub readings: String,
}

/// A batch record that could not be read as a `BatchRow`.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedRow {
    /// First field of the record, or `line N` when it is empty.
    pub location: String,
    pub line: u64,
    pub error: AssessmentError,
}

/// Read a batch CSV record by record. A malformed record becomes a
/// `RejectedRow` and reading continues with the next one; only header or
/// I/O failures abort.
pub fn read_batch_csv<R: io::Read>(
    reader: R,
) -> Result<Vec<Result<BatchRow, RejectedRow>>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                warn!("Skipping unreadable batch record at line {}: {}", line, e);
                rows.push(Err(RejectedRow {
                    location: format!("line {}", line),
                    line,
                    error: AssessmentError::ParseError {
                        token: String::new(),
                        position: 0,
                    },
                }));
                continue;
            }
        };

        let line = record.position().map_or(0, |p| p.line());
        match record.deserialize::<BatchRow>(Some(&headers)) {
            Ok(row) => rows.push(Ok(row)),
            Err(e) => {
                warn!("Batch record at line {} rejected: {}", line, e);
                // Column of the offending field, when the deserializer knows it.
                let field = match e.kind() {
                    csv::ErrorKind::Deserialize { err, .. } => err.field(),
                    _ => None,
                };
                let token = field
                    .and_then(|i| record.get(i as usize))
                    .unwrap_or_default()
                    .to_string();
                let location = match record.get(0) {
                    Some(label) if !label.is_empty() => label.to_string(),
                    _ => format!("line {}", line),
                };
                rows.push(Err(RejectedRow {
                    location,
                    line,
                    error: AssessmentError::ParseError {
                        token,
                        position: field.map_or(0, |i| i as usize + 1),
                    },
                }));
            }
        }
    }
    Ok(rows)
}
