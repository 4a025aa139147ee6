//! Chunked norm with an explicit FMA tail
//!
//! Only the full lane-width chunks go through the lane accumulator. The
//! first chunk squared seeds it, the rest are squared and added, and the
//! lanes are reduced to one scalar. The `len % L` trailing elements are then
//! folded in with `mul_add`, one rounding per element.
//!
//! No padding buffer is built, so this is the strategy [`NormKernel`]
//! uses by default.
//!
//! [`NormKernel`]: super::NormKernel

use crate::error::NormError;
use crate::lanes::{LaneAccumulator, LaneWidth, NormFloat};

/// Euclidean norm of `array` using `lane_width`-wide chunks and a scalar FMA tail.
///
/// # Arguments
///
/// * `array` - Values to take the norm of (may be empty)
/// * `lane_width` - Elements per chunk (1..=[`MAX_LANES`](crate::lanes::MAX_LANES))
pub fn chunked_norm_with_tail<T: NormFloat>(
    array: &[T],
    lane_width: usize,
) -> Result<T, NormError> {
    let width = LaneWidth::new(lane_width)?;
    Ok(chunked_tail_sum_sq(array, width).sqrt())
}

/// Squared norm counterpart of [`chunked_norm_with_tail`].
pub fn chunked_norm_with_tail_sq<T: NormFloat>(
    array: &[T],
    lane_width: usize,
) -> Result<T, NormError> {
    let width = LaneWidth::new(lane_width)?;
    Ok(chunked_tail_sum_sq(array, width))
}

pub(crate) fn chunked_tail_sum_sq<T: NormFloat>(array: &[T], width: LaneWidth) -> T {
    if array.is_empty() {
        return T::zero();
    }

    let mut chunks = array.chunks_exact(width.get());
    let tail = chunks.remainder();

    let mut sum = match chunks.next() {
        Some(first) => {
            let mut lanes = LaneAccumulator::squared(first);
            for chunk in chunks {
                lanes.add_squared(chunk);
            }
            lanes.reduce()
        }
        None => T::zero(),
    };

    for &x in tail {
        sum = x.mul_add(x, sum);
    }
    sum
}
