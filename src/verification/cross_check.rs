//! Cross-check of the chunked strategies against the scalar reference.
//!
//! Runs all three strategies over the same input and records the results
//! side by side, so a harness can report the computed values next to its
//! timings and catch a strategy that drifts.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::NormError;
use crate::lanes::{LaneWidth, NormFloat};
use crate::norms::NormStrategy;

/// Relative error of `value` against `reference`.
///
/// Equal values (including two zeros or two same-signed infinities) agree
/// exactly; against a zero reference the absolute error is returned. NaN in
/// either input gives NaN.
pub fn relative_error(value: f64, reference: f64) -> f64 {
    if value == reference {
        return 0.0;
    }
    let diff = (value - reference).abs();
    if reference == 0.0 {
        diff
    } else {
        diff / reference.abs()
    }
}

/// Results of every strategy on one input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrossCheck {
    /// Number of input elements.
    pub len: usize,
    /// Lane width used by the chunked strategies.
    pub lane_width: usize,
    /// Trailing elements outside any full chunk.
    pub tail_len: usize,
    /// Scalar reference norm.
    pub scalar: f64,
    /// Chunked norm with zero-padded tail.
    pub chunked: f64,
    /// Chunked norm with FMA tail.
    pub chunked_with_tail: f64,
    /// Relative error of `chunked` against `scalar`.
    pub chunked_rel_error: f64,
    /// Relative error of `chunked_with_tail` against `scalar`.
    pub chunked_with_tail_rel_error: f64,
}

impl CrossCheck {
    /// Evaluate every strategy on `array` with the given lane width.
    pub fn run<T: NormFloat>(array: &[T], lane_width: usize) -> Result<Self, NormError> {
        let width = LaneWidth::new(lane_width)?;
        let norm = |strategy: NormStrategy| {
            strategy
                .sum_sq(array, width)
                .sqrt()
                .to_f64()
                .unwrap_or(f64::NAN)
        };

        let scalar = norm(NormStrategy::Scalar);
        let chunked = norm(NormStrategy::Chunked);
        let chunked_with_tail = norm(NormStrategy::ChunkedWithTail);

        Ok(Self {
            len: array.len(),
            lane_width,
            tail_len: width.tail_len(array.len()),
            scalar,
            chunked,
            chunked_with_tail,
            chunked_rel_error: relative_error(chunked, scalar),
            chunked_with_tail_rel_error: relative_error(chunked_with_tail, scalar),
        })
    }

    /// Whether both chunked strategies are within `tolerance` (relative) of the reference.
    ///
    /// NaN results never agree.
    pub fn agrees_within(&self, tolerance: f64) -> bool {
        self.chunked_rel_error <= tolerance && self.chunked_with_tail_rel_error <= tolerance
    }

    /// Like [`agrees_within`](Self::agrees_within), but reports which strategy failed.
    pub fn verify(&self, tolerance: f64) -> Result<(), NormError> {
        if self.agrees_within(tolerance) {
            return Ok(());
        }
        let msg = format!(
            "len {} lane width {}: scalar {:e}, chunked {:e} (rel {:e}), chunked_with_tail {:e} (rel {:e}), tolerance {:e}",
            self.len,
            self.lane_width,
            self.scalar,
            self.chunked,
            self.chunked_rel_error,
            self.chunked_with_tail,
            self.chunked_with_tail_rel_error,
            tolerance
        );
        warn!("cross-check failed: {}", msg);
        Err(NormError::VerificationError(msg))
    }

    /// Serialize the cross-check to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error_zero_reference() {
        assert_eq!(relative_error(0.0, 0.0), 0.0);
        assert_eq!(relative_error(1e-3, 0.0), 1e-3);
    }

    #[test]
    fn test_relative_error_scaled() {
        assert!((relative_error(101.0, 100.0) - 0.01).abs() < 1e-12);
        assert!(relative_error(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_cross_check_tail_of_one() {
        let check = CrossCheck::run(&[1.0f64; 5], 4).unwrap();
        assert_eq!(check.len, 5);
        assert_eq!(check.tail_len, 1);
        assert!((check.scalar - 5.0f64.sqrt()).abs() < 1e-12);
        assert!(check.agrees_within(1e-9));
        assert!(check.verify(1e-9).is_ok());
    }

    #[test]
    fn test_cross_check_f32_input() {
        let values: Vec<f32> = (1..=19).map(|i| i as f32).collect();
        let check = CrossCheck::run(&values, 8).unwrap();
        assert_eq!(check.tail_len, 3);
        assert!(check.agrees_within(1e-5));
    }

    #[test]
    fn test_cross_check_nan_fails_verification() {
        let check = CrossCheck::run(&[1.0f64, f64::NAN], 2).unwrap();
        assert!(!check.agrees_within(1.0));
        assert!(matches!(
            check.verify(1.0),
            Err(NormError::VerificationError(_))
        ));
    }

    #[test]
    fn test_relative_error_matching_infinities() {
        assert_eq!(relative_error(f64::INFINITY, f64::INFINITY), 0.0);
        assert!(relative_error(f64::NEG_INFINITY, f64::INFINITY).is_nan());
    }

    #[test]
    fn test_cross_check_infinite_input_agrees() {
        let check = CrossCheck::run(&[1.0f64, f64::INFINITY, 2.0], 2).unwrap();
        assert_eq!(check.scalar, f64::INFINITY);
        assert_eq!(check.chunked, f64::INFINITY);
        assert_eq!(check.chunked_with_tail, f64::INFINITY);
        assert!(check.verify(1e-9).is_ok());
    }

    #[test]
    fn test_cross_check_invalid_lane_width() {
        assert!(CrossCheck::run(&[1.0f64], 0).is_err());
    }

    #[test]
    fn test_cross_check_serde() {
        let check = CrossCheck::run(&[3.0f64, 4.0, 0.0, 0.0], 4).unwrap();
        let json = check.to_json().unwrap();
        let restored: CrossCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, check);
    }
}
