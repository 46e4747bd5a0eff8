// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Evaluation parameters.
//!
//! Defaults follow KS F 2730 field practice. The angle and age tables are
//! fixed reference data and deliberately not part of this struct.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Half-width of the acceptance band around the raw mean (0.20 = ±20%).
    pub outlier_band: f64,
    /// Below this many readings the series cannot be evaluated at all.
    pub min_readings: usize,
    /// Nominal series length. The invalidity rule only applies from here on.
    pub standard_series: usize,
    /// Maximum rejected readings tolerated in a standard series.
    pub max_discards: usize,
    /// design_fck at or above this selects the high-strength formulas (MPa).
    pub high_strength_threshold_mpa: f64,
    /// Used when a batch row leaves the design strength blank (MPa).
    pub default_design_fck: f64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            outlier_band: 0.20,
            min_readings: 5,
            standard_series: 20,
            max_discards: 4,
            high_strength_threshold_mpa: 40.0,
            default_design_fck: 24.0,
        }
    }
}

impl AssessmentConfig {
    /// Parse overrides from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
