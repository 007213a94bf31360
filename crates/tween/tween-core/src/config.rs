//! Defaults applied when a tween is built without an explicit duration or curve.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::TweenError;

/// Duration used when none is given, in seconds.
pub const DEFAULT_DURATION: f64 = 1.0;

/// Tween defaults.
/// Zero or negative durations are legal and finish immediately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenConfig {
    /// Segment length in seconds for new tweens and default retargets.
    #[serde(default = "default_duration")]
    pub default_duration: f64,

    /// Curve for tweens built through [`Tween::from_config`](crate::Tween::from_config).
    #[serde(default)]
    pub default_curve: Curve,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_DURATION,
            default_curve: Curve::default(),
        }
    }
}

impl TweenConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TweenError> {
        let config: TweenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TweenError> {
        if !self.default_duration.is_finite() {
            return Err(TweenError::InvalidConfig {
                reason: format!(
                    "default_duration must be finite, got {}",
                    self.default_duration
                ),
            });
        }
        Ok(())
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.default_duration = seconds;
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.default_curve = curve;
        self
    }
}
