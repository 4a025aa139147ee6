//! # lane-norm: lane-chunked Euclidean norms
//!
//! Computes the 2-norm of an `f32`/`f64` slice by accumulating squared
//! elements in fixed-width lanes and reducing, with explicit handling of
//! lengths that are not a multiple of the lane width.
//!
//! ## Strategies
//!
//! - [`scalar_norm()`] - Element-by-element reference
//! - [`chunked_norm()`] - Lane accumulator, partial chunk zero-padded
//! - [`chunked_norm_with_tail()`] - Lane accumulator, FMA tail (recommended)
//!
//! ## High-Level API
//!
//! Use [`NormKernel`] to pick a strategy once and apply it to slices,
//! ndarray arrays or batches. The lane width is either fixed or taken from
//! the detected vector register size ([`LaneWidth::of`]).

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod lanes;
pub mod norms;
pub mod verification;

// Re-exports
pub use config::NormConfig;
pub use error::NormError;
pub use lanes::{LaneAccumulator, LaneWidth, NormFloat, MAX_LANES};
pub use norms::{chunked_norm, chunked_norm_sq};
pub use norms::{chunked_norm_with_tail, chunked_norm_with_tail_sq};
pub use norms::{scalar_norm, scalar_norm_sq};
pub use norms::{NormKernel, NormStrategy};
pub use verification::CrossCheck;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
