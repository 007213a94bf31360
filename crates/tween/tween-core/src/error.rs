//! Error types for curve lookup and tween configuration.
//!
//! Sampling a tween never fails; these errors only come from resolving a
//! curve by name/ordinal or from loading a [`TweenConfig`](crate::TweenConfig).

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// No curve is registered under this name
    #[error("Unknown easing curve: {name}")]
    UnknownCurve { name: String },

    /// Raw ordinal outside the curve table
    #[error("Curve ordinal {ordinal} is out of range [0, {max}]")]
    CurveOrdinalOutOfRange { ordinal: u32, max: u32 },

    /// Configuration rejected by validation
    #[error("Invalid tween configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl TweenError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownCurve { .. } | Self::CurveOrdinalOutOfRange { .. } => "curve",
            Self::InvalidConfig { .. } => "config",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
