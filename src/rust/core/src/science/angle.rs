// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Strike-direction correction for rebound readings.
//!
//! A non-horizontal strike biases the rebound through gravity. The correction
//! is a step function of the rebound index: the largest breakpoint not above
//! the index wins, and indices below the first breakpoint use the first row.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// (breakpoint R, additive correction)
type CorrectionRow = [(f64, f64); 5];

const DOWN_90: CorrectionRow = [(20.0, 3.2), (30.0, 3.1), (40.0, 2.7), (50.0, 2.2), (60.0, 1.7)];
const DOWN_45: CorrectionRow = [(20.0, 2.4), (30.0, 2.3), (40.0, 2.0), (50.0, 1.6), (60.0, 1.3)];
const HORIZONTAL: CorrectionRow = [(20.0, 0.0), (30.0, 0.0), (40.0, 0.0), (50.0, 0.0), (60.0, 0.0)];
const UP_45: CorrectionRow = [(20.0, -3.5), (30.0, -3.1), (40.0, -2.0), (50.0, -2.7), (60.0, -1.6)];
const UP_90: CorrectionRow = [(20.0, -5.4), (30.0, -4.7), (40.0, -3.9), (50.0, -3.1), (60.0, -2.3)];

/// Hammer direction relative to horizontal. Negative angles strike downwards
/// (floor slabs), positive angles upwards (soffits).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeAngle {
    Down90,
    Down45,
    Horizontal,
    Up45,
    Up90,
}

impl StrikeAngle {
    /// Only the five tabulated directions are recognized.
    pub fn from_degrees(degrees: i32) -> Option<StrikeAngle> {
        match degrees {
            -90 => Some(StrikeAngle::Down90),
            -45 => Some(StrikeAngle::Down45),
            0 => Some(StrikeAngle::Horizontal),
            45 => Some(StrikeAngle::Up45),
            90 => Some(StrikeAngle::Up90),
            _ => None,
        }
    }

    fn table(self) -> &'static CorrectionRow {
        match self {
            StrikeAngle::Down90 => &DOWN_90,
            StrikeAngle::Down45 => &DOWN_45,
            StrikeAngle::Horizontal => &HORIZONTAL,
            StrikeAngle::Up45 => &UP_45,
            StrikeAngle::Up90 => &UP_90,
        }
    }

    /// Correction for a rebound index struck in this direction.
    pub fn correction(self, rebound_index: f64) -> f64 {
        let table = self.table();
        // Number of breakpoints <= index; zero means below the floor.
        let idx = table.partition_point(|&(bp, _)| bp <= rebound_index);
        table[idx.saturating_sub(1)].1
    }
}

#[wasm_bindgen]
pub struct AngleCorrectionTable;

#[wasm_bindgen]
impl AngleCorrectionTable {
    /// Correction offset for an index struck at `angle_deg`.
    /// Unrecognized angles apply no correction.
    pub fn lookup(rebound_index: f64, angle_deg: i32) -> f64 {
        match StrikeAngle::from_degrees(angle_deg) {
            Some(angle) => angle.correction(rebound_index),
            None => 0.0,
        }
    }
}
