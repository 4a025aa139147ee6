//! Lane-width provider and lane-wide accumulator.
//!
//! - [`LaneWidth`] — validated number of elements processed together
//! - [`NormFloat`] — float types the kernels accept, with their detected lane width
//! - [`accumulator`] — fixed-size lane accumulator used by the chunked norms
//!
//! The vector register size is detected once per process from CPU features
//! and cached; the lane width of a type is that size divided by the element
//! size (at least one lane).

pub mod accumulator;

pub use accumulator::LaneAccumulator;

use std::fmt::Debug;
use std::mem::size_of;
use std::sync::OnceLock;

use log::debug;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::NormError;

/// Largest lane width a [`LaneAccumulator`] can hold.
///
/// 64 lanes covers a 512-bit register of bytes; float lanes never exceed 16.
pub const MAX_LANES: usize = 64;

/// Number of scalar elements processed together as one lane-wide unit.
///
/// Always in `1..=MAX_LANES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct LaneWidth(usize);

impl LaneWidth {
    /// Validate a raw lane width.
    pub fn new(width: usize) -> Result<Self, NormError> {
        if width == 0 || width > MAX_LANES {
            return Err(NormError::InvalidLaneWidth {
                width,
                max: MAX_LANES,
            });
        }
        Ok(Self(width))
    }

    /// Detected lane width for element type `T` on this machine.
    pub fn of<T: NormFloat>() -> Self {
        T::lane_width()
    }

    /// The width as a plain count.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of trailing elements of a `len`-element array that do not fill a lane.
    pub fn tail_len(self, len: usize) -> usize {
        len % self.0
    }

    /// Number of full lane-width chunks in a `len`-element array.
    pub fn full_chunks(self, len: usize) -> usize {
        len / self.0
    }
}

impl TryFrom<usize> for LaneWidth {
    type Error = NormError;

    fn try_from(width: usize) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

impl From<LaneWidth> for usize {
    fn from(width: LaneWidth) -> Self {
        width.0
    }
}

/// Floating-point element types accepted by the norm kernels.
///
/// Provides `sqrt`, `mul_add` and zero through [`num_traits::Float`], plus the
/// detected lane width for the type.
pub trait NormFloat: Float + Debug + Send + Sync + 'static {
    /// Lanes of this type in one vector register (at least 1).
    fn lane_width() -> LaneWidth {
        let lanes = (vector_register_bytes() / size_of::<Self>()).clamp(1, MAX_LANES);
        LaneWidth(lanes)
    }
}

impl NormFloat for f32 {}
impl NormFloat for f64 {}

/// Width in bytes of the widest vector register usable on this machine.
///
/// Detected on first call and cached for the rest of the process. Zero means
/// no vector unit was found.
pub fn vector_register_bytes() -> usize {
    static REGISTER_BYTES: OnceLock<usize> = OnceLock::new();
    *REGISTER_BYTES.get_or_init(|| {
        let bytes = detect_register_bytes();
        debug!("detected vector register width: {} bytes", bytes);
        bytes
    })
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_register_bytes() -> usize {
    if std::is_x86_feature_detected!("avx512f") {
        64
    } else if std::is_x86_feature_detected!("avx") {
        32
    } else if std::is_x86_feature_detected!("sse2") {
        16
    } else {
        0
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_register_bytes() -> usize {
    if std::arch::is_aarch64_feature_detected!("neon") {
        16
    } else {
        0
    }
}

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
fn detect_register_bytes() -> usize {
    16
}

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    all(target_arch = "wasm32", target_feature = "simd128")
)))]
fn detect_register_bytes() -> usize {
    0
}
