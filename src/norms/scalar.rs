//! Scalar reference norm (no lanes)
//!
//! Element-by-element accumulation in a single running sum. Every other
//! strategy is checked against this one.

use crate::lanes::NormFloat;

/// Euclidean norm of `array`, accumulated one element at a time.
///
/// Returns 0 for an empty slice.
pub fn scalar_norm<T: NormFloat>(array: &[T]) -> T {
    scalar_norm_sq(array).sqrt()
}

/// Sum of squares of `array` (the squared norm, avoids sqrt).
pub fn scalar_norm_sq<T: NormFloat>(array: &[T]) -> T {
    array.iter().fold(T::zero(), |sum, &x| sum + x * x)
}
