//! Kernel configuration.
//!
//! A [`NormConfig`] names a strategy and optionally pins the lane width.
//! Missing fields fall back to the defaults, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::NormError;
use crate::norms::NormStrategy;

/// Serializable settings for a [`NormKernel`](crate::NormKernel).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormConfig {
    /// Norm algorithm (default: `chunked_with_tail`).
    pub strategy: NormStrategy,
    /// Fixed lane width; `None` uses the detected width per element type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane_width: Option<usize>,
}

impl NormConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, NormError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
