//! Tween Core
//!
//! Time-based value interpolation ("tweening"). A [`Tween`] holds a start
//! value, an end value, a duration and a named easing [`Curve`]; polling it
//! reads the wall clock and returns the eased value for that instant.
//!
//! ```
//! use tween_core::{Curve, Tween};
//!
//! let tween = Tween::new(0.0_f64, 100.0, 5.0, Curve::EaseInOutQuad);
//! let v = tween.value();
//! assert!((0.0..=100.0).contains(&v));
//! ```

pub mod config;
pub mod curve;
pub mod error;
pub mod time;
pub mod tween;
pub mod value;

// Re-export common types for convenience
pub use config::{TweenConfig, DEFAULT_DURATION};
pub use curve::{
    curve_fn, curve_fn_by_name, curve_fn_raw, curve_names, Curve, CurveFamily, CurveFn, CurveKind,
};
pub use error::TweenError;
pub use time::{Clock, Instant, ManualClock, SystemClock};
pub use tween::Tween;
pub use value::Tweenable;

/// Tween result type
pub type Result<T> = core::result::Result<T, TweenError>;
