// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use wasm_bindgen::prelude::*;

/// (age in days, strength coefficient). 28 days is the reference age.
const AGE_TABLE: [(f64, f64); 11] = [
    (10.0, 1.55),
    (20.0, 1.12),
    (28.0, 1.00),
    (50.0, 0.87),
    (100.0, 0.78),
    (150.0, 0.74),
    (200.0, 0.72),
    (300.0, 0.70),
    (500.0, 0.67),
    (1000.0, 0.65),
    (3000.0, 0.63),
];

#[wasm_bindgen]
pub struct AgeCoefficientTable;

#[wasm_bindgen]
impl AgeCoefficientTable {
    /// Age coefficient by linear interpolation between tabulated ages.
    ///
    /// Ages outside [10, 3000] days clamp to the end coefficients, so the
    /// result always lies in [0.63, 1.55].
    pub fn coefficient(days: f64) -> f64 {
        let (first_day, first_coeff) = AGE_TABLE[0];
        let (last_day, last_coeff) = AGE_TABLE[AGE_TABLE.len() - 1];

        if days >= last_day {
            return last_coeff;
        }
        if days.is_nan() || days <= first_day {
            return first_coeff;
        }

        for pair in AGE_TABLE.windows(2) {
            let (d1, c1) = pair[0];
            let (d2, c2) = pair[1];
            if d1 <= days && days < d2 {
                let ratio = (days - d1) / (d2 - d1);
                return c1 + ratio * (c2 - c1);
            }
        }

        // Unreachable: the windows cover [first_day, last_day)
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_age_is_unity() {
        assert_eq!(AgeCoefficientTable::coefficient(28.0), 1.00);
    }

    #[test]
    fn test_anchor_points_exact() {
        for (day, coeff) in AGE_TABLE {
            assert_eq!(AgeCoefficientTable::coefficient(day), coeff, "day {}", day);
        }
    }

    #[test]
    fn test_interpolation_between_50_and_100() {
        let c = AgeCoefficientTable::coefficient(64.0);
        assert!((c - 0.8448).abs() < 1e-9, "got {}", c);
    }

    #[test]
    fn test_clamped_outside_table() {
        assert_eq!(AgeCoefficientTable::coefficient(3.0), 1.55);
        assert_eq!(AgeCoefficientTable::coefficient(0.0), 1.55);
        assert_eq!(AgeCoefficientTable::coefficient(10_000.0), 0.63);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let mut prev = AgeCoefficientTable::coefficient(10.0);
        let mut day = 10.0;
        while day <= 3000.0 {
            let c = AgeCoefficientTable::coefficient(day);
            assert!(c <= prev + 1e-12);
            assert!((0.63..=1.55).contains(&c));
            prev = c;
            day += 7.5;
        }
    }
}
