//! Euclidean norm strategies.
//!
//! Three interchangeable ways to compute `sqrt(sum a[i]^2)`:
//!
//! | Strategy | Tail handling | Role |
//! |----------|---------------|------|
//! | [`scalar_norm`] | none needed | Accuracy reference |
//! | [`chunked_norm`] | zero-padded into the first accumulator | Comparison |
//! | [`chunked_norm_with_tail`] | scalar FMA loop after reduction | Default |
//!
//! Strategies may differ in the last bits because floating-point addition
//! is not associative; only the scalar path is the reference.

pub mod chunked;
pub mod chunked_tail;
pub mod scalar;

pub use chunked::{chunked_norm, chunked_norm_sq};
pub use chunked_tail::{chunked_norm_with_tail, chunked_norm_with_tail_sq};
pub use scalar::{scalar_norm, scalar_norm_sq};

use log::trace;
use ndarray::{ArrayBase, Data, Dimension};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::NormConfig;
use crate::error::NormError;
use crate::lanes::{LaneWidth, NormFloat};

/// Norm strategy selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormStrategy {
    /// Element-by-element accumulation (reference)
    Scalar,
    /// Lane-wide accumulation, partial chunk zero-padded
    Chunked,
    /// Lane-wide accumulation over full chunks, FMA tail (default)
    #[default]
    ChunkedWithTail,
}

impl NormStrategy {
    /// Every strategy, reference first.
    pub const ALL: [NormStrategy; 3] = [
        NormStrategy::Scalar,
        NormStrategy::Chunked,
        NormStrategy::ChunkedWithTail,
    ];

    /// Stable name, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            NormStrategy::Scalar => "scalar",
            NormStrategy::Chunked => "chunked",
            NormStrategy::ChunkedWithTail => "chunked_with_tail",
        }
    }

    /// Sum of squares of `array` with this strategy.
    pub(crate) fn sum_sq<T: NormFloat>(self, array: &[T], width: LaneWidth) -> T {
        match self {
            NormStrategy::Scalar => scalar_norm_sq(array),
            NormStrategy::Chunked => chunked::chunked_sum_sq(array, width),
            NormStrategy::ChunkedWithTail => chunked_tail::chunked_tail_sum_sq(array, width),
        }
    }
}

/// High-level norm kernel: a strategy plus a lane width.
///
/// Without an explicit lane width the kernel asks the lane-width provider
/// for each element type it is used with.
///
/// # Example
///
/// ```rust
/// use lane_norm::{NormKernel, NormStrategy};
///
/// let kernel = NormKernel::new(NormStrategy::ChunkedWithTail, 4).unwrap();
/// let norm = kernel.norm(&[1.0f64, 1.0, 1.0, 1.0, 1.0]);
/// assert!((norm - 5.0f64.sqrt()).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormKernel {
    strategy: NormStrategy,
    lane_width: Option<LaneWidth>,
}

impl Default for NormKernel {
    fn default() -> Self {
        Self::detected(NormStrategy::default())
    }
}

impl NormKernel {
    /// Create a kernel with a fixed lane width.
    ///
    /// # Arguments
    ///
    /// * `strategy` - Which norm algorithm to use
    /// * `lane_width` - Elements per chunk (1..=[`MAX_LANES`](crate::lanes::MAX_LANES)).
    ///   Ignored by [`NormStrategy::Scalar`] but still validated.
    pub fn new(strategy: NormStrategy, lane_width: usize) -> Result<Self, NormError> {
        Ok(Self {
            strategy,
            lane_width: Some(LaneWidth::new(lane_width)?),
        })
    }

    /// Create a kernel that uses the detected lane width of each element type.
    pub fn detected(strategy: NormStrategy) -> Self {
        Self {
            strategy,
            lane_width: None,
        }
    }

    /// Build a kernel from configuration.
    pub fn from_config(config: &NormConfig) -> Result<Self, NormError> {
        match config.lane_width {
            Some(width) => Self::new(config.strategy, width),
            None => Ok(Self::detected(config.strategy)),
        }
    }

    /// The configured strategy.
    pub fn strategy(&self) -> NormStrategy {
        self.strategy
    }

    /// Lane width used for element type `T`.
    pub fn lane_width_for<T: NormFloat>(&self) -> LaneWidth {
        self.lane_width.unwrap_or_else(LaneWidth::of::<T>)
    }

    /// Euclidean norm of `array`.
    pub fn norm<T: NormFloat>(&self, array: &[T]) -> T {
        self.norm_sq(array).sqrt()
    }

    /// Squared Euclidean norm of `array` (avoids sqrt).
    pub fn norm_sq<T: NormFloat>(&self, array: &[T]) -> T {
        let width = self.lane_width_for::<T>();
        trace!(
            "{} norm over {} elements, lane width {}",
            self.strategy.name(),
            array.len(),
            width.get()
        );
        self.strategy.sum_sq(array, width)
    }

    /// Euclidean norm of every element of an n-dimensional array.
    ///
    /// Contiguous arrays are read in memory order without copying; other
    /// layouts are gathered into a temporary buffer first.
    pub fn norm_array<T, S, D>(&self, array: &ArrayBase<S, D>) -> T
    where
        T: NormFloat,
        S: Data<Elem = T>,
        D: Dimension,
    {
        match array.as_slice_memory_order() {
            Some(flat) => self.norm(flat),
            None => {
                let flat: Vec<T> = array.iter().copied().collect();
                self.norm(&flat)
            }
        }
    }

    /// Norms of many independent arrays, computed in parallel.
    ///
    /// Results are in the same order as `arrays`.
    pub fn norm_batch<T, A>(&self, arrays: &[A]) -> Vec<T>
    where
        T: NormFloat,
        A: AsRef<[T]> + Sync,
    {
        arrays.par_iter().map(|a| self.norm(a.as_ref())).collect()
    }
}
