// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Rebound outlier rejection (KS F 2730).
//!
//! Readings outside ±20% of the raw mean are discarded. A standard series of
//! 20 or more readings is void when more than 4 are discarded.

use crate::config::AssessmentConfig;
use crate::error::AssessmentError;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilteredReadings {
    /// Retained readings, in input order.
    pub valid: Vec<f64>,
    pub valid_mean: f64,
    /// Mean of the full series, before rejection.
    pub raw_mean: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Rejected readings, in input order.
    pub excluded: Vec<f64>,
    pub discard_count: usize,
}

pub struct OutlierFilter<'a> {
    config: &'a AssessmentConfig,
}

impl<'a> OutlierFilter<'a> {
    pub fn new(config: &'a AssessmentConfig) -> Self {
        OutlierFilter { config }
    }

    pub fn apply(&self, readings: &[f64]) -> Result<FilteredReadings, AssessmentError> {
        let total = readings.len();
        if total < self.config.min_readings {
            return Err(AssessmentError::DataInsufficient { actual: total });
        }

        let raw_mean = mean(readings);
        let lower_bound = raw_mean * (1.0 - self.config.outlier_band);
        let upper_bound = raw_mean * (1.0 + self.config.outlier_band);

        let (valid, excluded): (Vec<f64>, Vec<f64>) = readings
            .iter()
            .partition(|&&r| lower_bound <= r && r <= upper_bound);
        let discard_count = excluded.len();

        debug!(
            "OutlierFilter: mean={:.3} bounds=[{:.3}, {:.3}] discarded={}/{}",
            raw_mean, lower_bound, upper_bound, discard_count, total
        );

        // An empty valid set outranks the discard-count rule.
        if valid.is_empty() {
            return Err(AssessmentError::NoValidData { total });
        }
        if total >= self.config.standard_series && discard_count > self.config.max_discards {
            return Err(AssessmentError::TestInvalid {
                discarded: discard_count,
                total,
            });
        }

        Ok(FilteredReadings {
            valid_mean: mean(&valid),
            valid,
            raw_mean,
            lower_bound,
            upper_bound,
            excluded,
            discard_count,
        })
    }
}

/// Caller guarantees a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
