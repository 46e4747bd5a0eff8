// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Descriptive statistics over a batch of strength estimates.

use crate::error::AssessmentError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1).
    pub std_dev: f64,
    /// Coefficient of variation in percent; 0 when the mean is not positive.
    pub cv: f64,
    pub min: f64,
    pub max: f64,
    pub threshold: Option<f64>,
    /// Values strictly below `threshold`.
    pub below_threshold: Option<usize>,
}

pub struct StatisticsEngine;

impl StatisticsEngine {
    pub fn summarize(
        values: &[f64],
        threshold: Option<f64>,
    ) -> Result<StatisticsSummary, AssessmentError> {
        let n = values.len();
        if n < 2 {
            return Err(AssessmentError::InsufficientSamples { actual: n });
        }

        // Welford: single pass, stable for clustered values
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (i, &x) in values.iter().enumerate() {
            let delta = x - mean;
            mean += delta / (i + 1) as f64;
            m2 += delta * (x - mean);
            min = min.min(x);
            max = max.max(x);
        }

        let std_dev = (m2 / (n - 1) as f64).sqrt();
        let cv = if mean > 0.0 { std_dev / mean * 100.0 } else { 0.0 };
        let below_threshold = threshold.map(|t| values.iter().filter(|&&v| v < t).count());

        Ok(StatisticsSummary {
            count: n,
            mean,
            std_dev,
            cv,
            min,
            max,
            threshold,
            below_threshold,
        })
    }
}
