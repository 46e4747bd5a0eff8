// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::config::AssessmentConfig;
use crate::error::AssessmentError;
use crate::formulas;
use crate::science::angle::AngleCorrectionTable;
use crate::science::maturity::AgeCoefficientTable;
use crate::science::outliers::OutlierFilter;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Empirical rebound-to-strength regressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Aij,
    Jsms,
    Mst,
    Kwon,
    Kalis,
}

impl Formula {
    pub const ALL: [Formula; 5] = [
        Formula::Aij,
        Formula::Jsms,
        Formula::Mst,
        Formula::Kwon,
        Formula::Kalis,
    ];

    pub fn estimate(self, r0: f64, age_coeff: f64) -> f64 {
        match self {
            Formula::Aij => formulas::aij_strength(r0, age_coeff),
            Formula::Jsms => formulas::jsms_strength(r0, age_coeff),
            Formula::Mst => formulas::mst_strength(r0, age_coeff),
            Formula::Kwon => formulas::kwon_strength(r0, age_coeff),
            Formula::Kalis => formulas::kalis_strength(r0, age_coeff),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Formula::Aij => "AIJ (general)",
            Formula::Jsms => "JSMS (general)",
            Formula::Mst => "MST (high strength)",
            Formula::Kwon => "Kwon (high strength)",
            Formula::Kalis => "KALIS (high strength, 40 MPa+)",
        }
    }

    pub fn expression(self) -> &'static str {
        match self {
            Formula::Aij => "(7.3×R0 + 100) × 0.098",
            Formula::Jsms => "1.27×R0 - 18.0",
            Formula::Mst => "(15.2×R0 - 112.8) × 0.098",
            Formula::Kwon => "2.304×R0 - 38.80",
            Formula::Kalis => "1.3343×R0 + 8.1977",
        }
    }
}

/// Which formulas apply to the target strength class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormulaFamily {
    General,
    HighStrength,
}

impl FormulaFamily {
    pub fn select(design_fck: f64, high_strength_threshold: f64) -> FormulaFamily {
        if design_fck < high_strength_threshold {
            FormulaFamily::General
        } else {
            FormulaFamily::HighStrength
        }
    }

    pub fn members(self) -> &'static [Formula] {
        match self {
            FormulaFamily::General => &[Formula::Aij, Formula::Jsms],
            FormulaFamily::HighStrength => &[Formula::Mst, Formula::Kwon, Formula::Kalis],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthGrade {
    A,
    B,
    C,
    #[serde(rename = "D/E")]
    DE,
}

impl StrengthGrade {
    /// Grade from estimated/design strength ratio in percent.
    pub fn from_ratio(ratio_pct: f64) -> StrengthGrade {
        if ratio_pct >= 100.0 {
            StrengthGrade::A
        } else if ratio_pct >= 90.0 {
            StrengthGrade::B
        } else if ratio_pct >= 75.0 {
            StrengthGrade::C
        } else {
            StrengthGrade::DE
        }
    }
}

impl fmt::Display for StrengthGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrengthGrade::A => "A",
            StrengthGrade::B => "B",
            StrengthGrade::C => "C",
            StrengthGrade::DE => "D/E",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormulaEstimates {
    pub aij: f64,
    pub jsms: f64,
    pub mst: f64,
    pub kwon: f64,
    pub kalis: f64,
}

impl FormulaEstimates {
    pub fn compute(r0: f64, age_coeff: f64) -> Self {
        FormulaEstimates {
            aij: Formula::Aij.estimate(r0, age_coeff),
            jsms: Formula::Jsms.estimate(r0, age_coeff),
            mst: Formula::Mst.estimate(r0, age_coeff),
            kwon: Formula::Kwon.estimate(r0, age_coeff),
            kalis: Formula::Kalis.estimate(r0, age_coeff),
        }
    }

    pub fn get(&self, formula: Formula) -> f64 {
        match formula {
            Formula::Aij => self.aij,
            Formula::Jsms => self.jsms,
            Formula::Mst => self.mst,
            Formula::Kwon => self.kwon,
            Formula::Kalis => self.kalis,
        }
    }

    /// Mean over a family's formulas.
    pub fn family_mean(&self, family: FormulaFamily) -> f64 {
        let members = family.members();
        members.iter().map(|&f| self.get(f)).sum::<f64>() / members.len() as f64
    }
}

/// One line of the formula comparison table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormulaLine {
    pub formula: Formula,
    pub label: String,
    pub expression: String,
    /// MPa
    pub strength: f64,
    /// Counted in `mean_strength`.
    pub selected: bool,
}

impl FormulaLine {
    /// All five formulas in table order, flagging the selected family.
    pub fn table(estimates: &FormulaEstimates, family: FormulaFamily) -> Vec<FormulaLine> {
        Formula::ALL
            .iter()
            .map(|&formula| FormulaLine {
                formula,
                label: formula.label().to_string(),
                expression: formula.expression().to_string(),
                strength: estimates.get(formula),
                selected: family.members().contains(&formula),
            })
            .collect()
    }
}

/// Full rebound-hammer evaluation record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub reading_count: usize,
    pub valid_count: usize,
    pub discard_count: usize,
    pub excluded: Vec<f64>,
    /// Mean of the full series, before rejection.
    pub raw_mean: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Mean of the retained readings.
    pub r_avg: f64,
    pub angle_correction: f64,
    /// Angle-corrected rebound index.
    pub r0: f64,
    pub age_coeff: f64,
    pub estimates: FormulaEstimates,
    pub family: FormulaFamily,
    pub formula_table: Vec<FormulaLine>,
    pub design_fck: f64,
    /// MPa
    pub mean_strength: f64,
    /// Percent of design_fck.
    pub ratio: f64,
    pub grade: StrengthGrade,
}

pub struct StrengthEstimator<'a> {
    config: &'a AssessmentConfig,
}

impl<'a> StrengthEstimator<'a> {
    pub fn new(config: &'a AssessmentConfig) -> Self {
        StrengthEstimator { config }
    }

    /// Estimate compressive strength from a rebound series.
    ///
    /// # Arguments
    /// * `readings`: raw rebound readings, normally 20
    /// * `angle_deg`: strike direction (-90, -45, 0, 45, 90)
    /// * `age_days`: concrete age in days
    /// * `design_fck`: specified strength in MPa
    pub fn estimate(
        &self,
        readings: &[f64],
        angle_deg: i32,
        age_days: f64,
        design_fck: f64,
    ) -> Result<StrengthReport, AssessmentError> {
        if !design_fck.is_finite() || design_fck <= 0.0 {
            return Err(AssessmentError::InvalidDesignStrength { value: design_fck });
        }

        let filtered = OutlierFilter::new(self.config).apply(readings)?;

        let r_avg = filtered.valid_mean;
        let angle_correction = AngleCorrectionTable::lookup(r_avg, angle_deg);
        let r0 = r_avg + angle_correction;
        let age_coeff = AgeCoefficientTable::coefficient(age_days);

        let estimates = FormulaEstimates::compute(r0, age_coeff);
        let family = FormulaFamily::select(design_fck, self.config.high_strength_threshold_mpa);
        let mean_strength = estimates.family_mean(family);
        let ratio = mean_strength / design_fck * 100.0;

        debug!(
            "StrengthEstimator: R_avg={:.2} R0={:.2} age_coeff={:.3} family={:?} mean={:.2} MPa",
            r_avg, r0, age_coeff, family, mean_strength
        );

        Ok(StrengthReport {
            reading_count: readings.len(),
            valid_count: filtered.valid.len(),
            discard_count: filtered.discard_count,
            excluded: filtered.excluded,
            raw_mean: filtered.raw_mean,
            lower_bound: filtered.lower_bound,
            upper_bound: filtered.upper_bound,
            r_avg,
            angle_correction,
            r0,
            age_coeff,
            estimates,
            family,
            formula_table: FormulaLine::table(&estimates, family),
            design_fck,
            mean_strength,
            ratio,
            grade: StrengthGrade::from_ratio(ratio),
        })
    }
}
