// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Error taxonomy shared by every evaluation stage.
//!
//! All failures are permanent consequences of the input. The `Display` text of
//! each variant is the reason string shown to the operator.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind")]
pub enum AssessmentError {
    #[error("Too few readings: {actual} supplied, at least 5 are required")]
    DataInsufficient { actual: usize },

    #[error(
        "Test invalid, re-measure: {discarded} of {total} readings rejected \
         (more than 20% of the series, KS F 2730)"
    )]
    TestInvalid { discarded: usize, total: usize },

    #[error("No valid readings: all {total} readings were rejected as outliers")]
    NoValidData { total: usize },

    #[error("Insufficient samples: need at least 2, got {actual}")]
    InsufficientSamples { actual: usize },

    #[error("Non-numeric token '{token}' at position {position}")]
    ParseError { token: String, position: usize },

    #[error("Design strength must be a positive number of MPa, got {value}")]
    InvalidDesignStrength { value: f64 },
}

impl AssessmentError {
    /// Stable machine-readable code, used in exported tables.
    pub fn code(&self) -> &'static str {
        match self {
            AssessmentError::DataInsufficient { .. } => "DATA_INSUFFICIENT",
            AssessmentError::TestInvalid { .. } => "TEST_INVALID",
            AssessmentError::NoValidData { .. } => "NO_VALID_DATA",
            AssessmentError::InsufficientSamples { .. } => "INSUFFICIENT_SAMPLES",
            AssessmentError::ParseError { .. } => "PARSE_ERROR",
            AssessmentError::InvalidDesignStrength { .. } => "INVALID_DESIGN_STRENGTH",
        }
    }
}
