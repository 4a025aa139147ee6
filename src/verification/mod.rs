//! Verification of norm strategies.
//!
//! - [`cross_check`] — Compare the chunked strategies with the scalar reference

pub mod cross_check;

pub use cross_check::{relative_error, CrossCheck};
