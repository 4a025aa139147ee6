//! Error types for lane-norm

use thiserror::Error;

/// All possible errors in lane-norm
#[derive(Error, Debug)]
pub enum NormError {
    /// Lane width is zero or larger than the accumulator can hold
    #[error("Invalid lane width: {width} (must be 1..={max})")]
    InvalidLaneWidth {
        /// Requested lane width
        width: usize,
        /// Largest supported lane width
        max: usize,
    },

    /// Kernel configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A strategy disagreed with the scalar reference
    #[error("Verification failed: {0}")]
    VerificationError(String),
}

impl From<serde_json::Error> for NormError {
    fn from(e: serde_json::Error) -> Self {
        NormError::InvalidConfig(e.to_string())
    }
}
