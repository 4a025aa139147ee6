//! Fixed-size lane accumulator.
//!
//! Holds one running sum of squares per lane in a stack array of
//! [`MAX_LANES`] elements, of which only the first `width` are live.
//! Lane-wise loops over a fixed-size array are what the compiler turns
//! into vector instructions; no reinterpretation of the input is needed.

use super::{LaneWidth, NormFloat, MAX_LANES};

/// Lane-wide running sums, one per lane.
#[derive(Clone, Copy, Debug)]
pub struct LaneAccumulator<T> {
    lanes: [T; MAX_LANES],
    width: usize,
}

impl<T: NormFloat> LaneAccumulator<T> {
    /// All-zero accumulator.
    pub fn zero(width: LaneWidth) -> Self {
        Self {
            lanes: [T::zero(); MAX_LANES],
            width: width.get(),
        }
    }

    /// Accumulator loaded with one full chunk (not squared).
    ///
    /// `chunk.len()` is the lane width.
    ///
    /// # Panics
    ///
    /// If `chunk` is empty or longer than [`MAX_LANES`].
    pub fn load(chunk: &[T]) -> Self {
        assert!(
            !chunk.is_empty() && chunk.len() <= MAX_LANES,
            "chunk of {} elements does not fit 1..={} lanes",
            chunk.len(),
            MAX_LANES
        );
        let mut lanes = [T::zero(); MAX_LANES];
        lanes[..chunk.len()].copy_from_slice(chunk);
        Self {
            lanes,
            width: chunk.len(),
        }
    }

    /// Accumulator holding `tail` in its low lanes and zeros above.
    ///
    /// An empty tail gives the zero accumulator.
    ///
    /// # Panics
    ///
    /// If `tail` is not shorter than `width`.
    pub fn load_padded(tail: &[T], width: LaneWidth) -> Self {
        assert!(
            tail.len() < width.get(),
            "tail of {} elements is not shorter than lane width {}",
            tail.len(),
            width.get()
        );
        let mut acc = Self::zero(width);
        acc.lanes[..tail.len()].copy_from_slice(tail);
        acc
    }

    /// Accumulator initialised with `chunk` squared lane-wise.
    pub fn squared(chunk: &[T]) -> Self {
        let mut acc = Self::load(chunk);
        acc.square();
        acc
    }

    /// Multiply every live lane by itself.
    #[inline]
    pub fn square(&mut self) {
        for lane in &mut self.lanes[..self.width] {
            *lane = *lane * *lane;
        }
    }

    /// Square `chunk` lane-wise and add it into the running sums.
    ///
    /// # Panics
    ///
    /// If `chunk.len()` differs from the accumulator width.
    #[inline]
    pub fn add_squared(&mut self, chunk: &[T]) {
        assert_eq!(chunk.len(), self.width, "chunk length must equal lane width");
        for (lane, &x) in self.lanes[..self.width].iter_mut().zip(chunk) {
            *lane = *lane + x * x;
        }
    }

    /// Sum the live lanes in lane order.
    #[inline]
    pub fn reduce(&self) -> T {
        self.lanes[..self.width]
            .iter()
            .fold(T::zero(), |sum, &lane| sum + lane)
    }

    /// Number of live lanes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The live lanes.
    pub fn lanes(&self) -> &[T] {
        &self.lanes[..self.width]
    }
}
