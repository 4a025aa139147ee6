//! Chunked norm with a zero-padded partial chunk
//!
//! The `len % L` trailing elements are copied into the low lanes of a zeroed
//! lane buffer, which becomes the initial accumulator. The full chunks are
//! then squared and added lane-wise, and the lanes are summed at the end.
//!
//! Trailing elements live only in the padded accumulator; `chunks_exact`
//! never yields them, so each element is squared exactly once. The copy
//! into the padding buffer makes this slower than
//! [`chunked_norm_with_tail`](super::chunked_norm_with_tail) for short arrays,
//! which is the strategy to prefer.

use crate::error::NormError;
use crate::lanes::{LaneAccumulator, LaneWidth, NormFloat};

/// Euclidean norm of `array` using `lane_width`-wide chunks and a padded tail.
///
/// # Arguments
///
/// * `array` - Values to take the norm of (may be empty)
/// * `lane_width` - Elements per chunk (1..=[`MAX_LANES`](crate::lanes::MAX_LANES))
pub fn chunked_norm<T: NormFloat>(array: &[T], lane_width: usize) -> Result<T, NormError> {
    let width = LaneWidth::new(lane_width)?;
    Ok(chunked_sum_sq(array, width).sqrt())
}

/// Squared norm counterpart of [`chunked_norm`].
pub fn chunked_norm_sq<T: NormFloat>(array: &[T], lane_width: usize) -> Result<T, NormError> {
    let width = LaneWidth::new(lane_width)?;
    Ok(chunked_sum_sq(array, width))
}

pub(crate) fn chunked_sum_sq<T: NormFloat>(array: &[T], width: LaneWidth) -> T {
    let chunks = array.chunks_exact(width.get());
    let mut sum = LaneAccumulator::load_padded(chunks.remainder(), width);
    sum.square();
    for chunk in chunks {
        sum.add_squared(chunk);
    }
    sum.reduce()
}
