// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Empirical Rebound-Hammer Strength Formulas
//!
//! Pure functions mapping an angle-corrected rebound index (R0) and an age
//! coefficient to an estimated compressive strength in MPa. Every result is
//! floored at zero: a negative strength has no physical meaning.
//!
//! References:
//! - Architectural Institute of Japan (AIJ): general-strength concrete
//! - Society of Materials Science, Japan (JSMS): general-strength concrete
//! - Ministry of Science and Technology (MST): high-strength concrete
//! - Kwon Young-Woong: high-strength concrete
//! - KALIS: high-strength concrete, 40 MPa and above

use wasm_bindgen::prelude::*;

/// kgf/cm² to MPa
const KGF_CM2_TO_MPA: f64 = 0.098;

// ============================================================================
// GENERAL-STRENGTH MODELS
// ============================================================================

/// AIJ formula
///
/// f = (7.3·R0 + 100) × 0.098 × age_coeff
#[wasm_bindgen]
pub fn aij_strength(r0: f64, age_coeff: f64) -> f64 {
    ((7.3 * r0 + 100.0) * KGF_CM2_TO_MPA * age_coeff).max(0.0)
}

/// JSMS formula
///
/// f = (1.27·R0 − 18.0) × age_coeff
#[wasm_bindgen]
pub fn jsms_strength(r0: f64, age_coeff: f64) -> f64 {
    ((1.27 * r0 - 18.0) * age_coeff).max(0.0)
}

// ============================================================================
// HIGH-STRENGTH MODELS
// ============================================================================

/// MST formula
///
/// f = (15.2·R0 − 112.8) × 0.098 × age_coeff
#[wasm_bindgen]
pub fn mst_strength(r0: f64, age_coeff: f64) -> f64 {
    ((15.2 * r0 - 112.8) * KGF_CM2_TO_MPA * age_coeff).max(0.0)
}

/// Kwon formula
///
/// f = (2.304·R0 − 38.80) × age_coeff
#[wasm_bindgen]
pub fn kwon_strength(r0: f64, age_coeff: f64) -> f64 {
    ((2.304 * r0 - 38.80) * age_coeff).max(0.0)
}

/// KALIS formula
///
/// f = (1.3343·R0 + 8.1977) × age_coeff
#[wasm_bindgen]
pub fn kalis_strength(r0: f64, age_coeff: f64) -> f64 {
    ((1.3343 * r0 + 8.1977) * age_coeff).max(0.0)
}
