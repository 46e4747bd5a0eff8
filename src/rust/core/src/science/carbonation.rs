// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Carbonation depth assessment.
//!
//! Penetration follows the square-root-of-time law x = k·√t, so the time for
//! the carbonation front to reach the design cover is (cover / k)².

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarbonationGrade {
    A,
    B,
    C,
    D,
}

impl CarbonationGrade {
    /// Grade by residual cover in mm. Thresholds are inclusive lower bounds.
    pub fn from_remaining_depth(remaining_mm: f64) -> CarbonationGrade {
        if remaining_mm >= 30.0 {
            CarbonationGrade::A
        } else if remaining_mm >= 10.0 {
            CarbonationGrade::B
        } else if remaining_mm >= 0.0 {
            CarbonationGrade::C
        } else {
            CarbonationGrade::D
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CarbonationGrade::A => "Very good (30 mm or more of cover remaining)",
            CarbonationGrade::B => "Good (10 mm or more of cover remaining)",
            CarbonationGrade::C => "Fair (less than 10 mm of cover remaining)",
            CarbonationGrade::D => "Poor (carbonation past the reinforcement, corrosion risk)",
        }
    }
}

impl fmt::Display for CarbonationGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CarbonationGrade::A => "A",
            CarbonationGrade::B => "B",
            CarbonationGrade::C => "C",
            CarbonationGrade::D => "D",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "years")]
pub enum RemainingLife {
    /// Years until the front reaches the cover, floored at zero.
    Years(f64),
    /// The front has already reached the reinforcement.
    AlreadyReached,
    /// No measurable penetration.
    NoProgression,
    /// No usable rate (non-positive age with measurable depth).
    Incomputable,
}

impl fmt::Display for RemainingLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemainingLife::Years(y) => write!(f, "{:.1} years", y),
            RemainingLife::AlreadyReached => f.write_str("0 years (already reached)"),
            RemainingLife::NoProgression => f.write_str("99+ years (no progression)"),
            RemainingLife::Incomputable => f.write_str("incomputable"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonationReport {
    pub measured_depth: f64,
    pub design_cover: f64,
    pub age_years: f64,
    /// mm
    pub remaining_depth: f64,
    /// mm/√year
    pub rate_coefficient: f64,
    pub predicted_life: RemainingLife,
    /// Operator-facing rendering of `predicted_life`.
    pub life_display: String,
    pub grade: CarbonationGrade,
    pub grade_description: String,
    /// Carbonation has reached or passed the reinforcement.
    pub hazard: bool,
}

pub struct CarbonationAssessor;

impl CarbonationAssessor {
    /// # Arguments
    /// * `measured_depth`: carbonation depth in mm
    /// * `design_cover`: design cover thickness in mm
    /// * `age_years`: service age in years
    pub fn assess(measured_depth: f64, design_cover: f64, age_years: f64) -> CarbonationReport {
        let remaining_depth = design_cover - measured_depth;

        // [GUARDRAIL] sqrt/division only for positive age
        let rate_coefficient = if age_years > 0.0 {
            measured_depth / age_years.sqrt()
        } else {
            0.0
        };

        let predicted_life = if rate_coefficient > 0.0 {
            if remaining_depth <= 0.0 {
                RemainingLife::AlreadyReached
            } else {
                let total_time = (design_cover / rate_coefficient).powi(2);
                RemainingLife::Years((total_time - age_years).max(0.0))
            }
        } else if measured_depth == 0.0 {
            RemainingLife::NoProgression
        } else {
            RemainingLife::Incomputable
        };

        let grade = CarbonationGrade::from_remaining_depth(remaining_depth);

        CarbonationReport {
            measured_depth,
            design_cover,
            age_years,
            remaining_depth,
            rate_coefficient,
            predicted_life,
            life_display: predicted_life.to_string(),
            grade,
            grade_description: grade.description().to_string(),
            hazard: remaining_depth <= 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_year_old_member() {
        let r = CarbonationAssessor::assess(12.0, 40.0, 20.0);
        assert_eq!(r.remaining_depth, 28.0);
        assert_eq!(r.grade, CarbonationGrade::B);
        assert!((r.rate_coefficient - 2.683).abs() < 1e-3);
        match r.predicted_life {
            RemainingLife::Years(y) => assert!((y - 202.2).abs() < 0.1, "got {}", y),
            other => panic!("expected numeric life, got {:?}", other),
        }
        assert!(!r.hazard);
    }

    #[test]
    fn test_zero_depth_reports_no_progression() {
        let r = CarbonationAssessor::assess(0.0, 40.0, 20.0);
        assert_eq!(r.rate_coefficient, 0.0);
        assert_eq!(r.predicted_life, RemainingLife::NoProgression);
        assert_eq!(r.grade, CarbonationGrade::A);
    }

    #[test]
    fn test_grade_boundaries() {
        let at_cover = CarbonationAssessor::assess(40.0, 40.0, 20.0);
        assert_eq!(at_cover.remaining_depth, 0.0);
        assert_eq!(at_cover.grade, CarbonationGrade::C);
        assert_eq!(at_cover.predicted_life, RemainingLife::AlreadyReached);

        let past_cover = CarbonationAssessor::assess(40.1, 40.0, 20.0);
        assert!((past_cover.remaining_depth + 0.1).abs() < 1e-9);
        assert_eq!(past_cover.grade, CarbonationGrade::D);
        assert!(past_cover.hazard);

        assert_eq!(CarbonationGrade::from_remaining_depth(30.0), CarbonationGrade::A);
        assert_eq!(CarbonationGrade::from_remaining_depth(10.0), CarbonationGrade::B);
        assert_eq!(CarbonationGrade::from_remaining_depth(9.9), CarbonationGrade::C);
    }

    #[test]
    fn test_non_positive_age_is_guarded() {
        let r = CarbonationAssessor::assess(12.0, 40.0, 0.0);
        assert_eq!(r.rate_coefficient, 0.0);
        assert_eq!(r.predicted_life, RemainingLife::Incomputable);

        let r = CarbonationAssessor::assess(12.0, 40.0, -3.0);
        assert!(r.rate_coefficient.is_finite());
        assert_eq!(r.predicted_life, RemainingLife::Incomputable);
    }

    #[test]
    fn test_life_positive_while_cover_remains() {
        // k = 35/√4 = 17.5, (40/17.5)² ≈ 5.2 years total, 4 already elapsed
        let r = CarbonationAssessor::assess(35.0, 40.0, 4.0);
        assert!(matches!(r.predicted_life, RemainingLife::Years(y) if y > 0.0));
        // k = 38/√100 = 3.8, (40/3.8)² ≈ 110.8 total, 100 elapsed
        let r = CarbonationAssessor::assess(38.0, 40.0, 100.0);
        assert!(matches!(r.predicted_life, RemainingLife::Years(y) if y >= 0.0));
    }

    #[test]
    fn test_life_positive_for_every_depth_below_cover() {
        for age in [1.0, 5.0, 20.0, 50.0, 100.0] {
            for depth in 1..40 {
                let r = CarbonationAssessor::assess(depth as f64, 40.0, age);
                assert!(
                    matches!(r.predicted_life, RemainingLife::Years(y) if y > 0.0),
                    "depth {} mm at {} years gave {:?}",
                    depth,
                    age,
                    r.predicted_life
                );
            }
        }
    }

    #[test]
    fn test_report_display_strings() {
        let r = CarbonationAssessor::assess(12.0, 40.0, 20.0);
        assert_eq!(r.life_display, "202.2 years");
        assert_eq!(r.grade_description, "Good (10 mm or more of cover remaining)");

        let r = CarbonationAssessor::assess(0.0, 40.0, 20.0);
        assert_eq!(r.life_display, "99+ years (no progression)");

        let r = CarbonationAssessor::assess(40.1, 40.0, 20.0);
        assert_eq!(r.life_display, "0 years (already reached)");
        assert!(r.grade_description.contains("corrosion risk"));

        let r = CarbonationAssessor::assess(12.0, 40.0, 0.0);
        assert_eq!(r.life_display, "incomputable");
    }
}
