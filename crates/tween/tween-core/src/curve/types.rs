use crate::error::TweenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named easing curve selector.
///
/// Ordinals and snake_case names are stable; persisted selectors (by name
/// through serde, or by [`Curve::ordinal`]) stay valid across releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Curve {
    EaseInSine,
    EaseOutSine,
    #[default]
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

/// Curve family, ten in total, each with in/out/in-out variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveFamily {
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Back,
    Elastic,
    Bounce,
}

/// Which end of the segment a curve accelerates or decelerates at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    In,
    Out,
    InOut,
}

impl Curve {
    /// Number of named curves.
    pub const COUNT: usize = 30;

    /// Every curve in ordinal order.
    pub const ALL: [Curve; Curve::COUNT] = [
        Curve::EaseInSine,
        Curve::EaseOutSine,
        Curve::EaseInOutSine,
        Curve::EaseInQuad,
        Curve::EaseOutQuad,
        Curve::EaseInOutQuad,
        Curve::EaseInCubic,
        Curve::EaseOutCubic,
        Curve::EaseInOutCubic,
        Curve::EaseInQuart,
        Curve::EaseOutQuart,
        Curve::EaseInOutQuart,
        Curve::EaseInQuint,
        Curve::EaseOutQuint,
        Curve::EaseInOutQuint,
        Curve::EaseInExpo,
        Curve::EaseOutExpo,
        Curve::EaseInOutExpo,
        Curve::EaseInCirc,
        Curve::EaseOutCirc,
        Curve::EaseInOutCirc,
        Curve::EaseInBack,
        Curve::EaseOutBack,
        Curve::EaseInOutBack,
        Curve::EaseInElastic,
        Curve::EaseOutElastic,
        Curve::EaseInOutElastic,
        Curve::EaseInBounce,
        Curve::EaseOutBounce,
        Curve::EaseInOutBounce,
    ];

    /// Stable ordinal, the index into [`Curve::ALL`]
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Stable snake_case name
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::EaseInSine => "ease_in_sine",
            Self::EaseOutSine => "ease_out_sine",
            Self::EaseInOutSine => "ease_in_out_sine",
            Self::EaseInQuad => "ease_in_quad",
            Self::EaseOutQuad => "ease_out_quad",
            Self::EaseInOutQuad => "ease_in_out_quad",
            Self::EaseInCubic => "ease_in_cubic",
            Self::EaseOutCubic => "ease_out_cubic",
            Self::EaseInOutCubic => "ease_in_out_cubic",
            Self::EaseInQuart => "ease_in_quart",
            Self::EaseOutQuart => "ease_out_quart",
            Self::EaseInOutQuart => "ease_in_out_quart",
            Self::EaseInQuint => "ease_in_quint",
            Self::EaseOutQuint => "ease_out_quint",
            Self::EaseInOutQuint => "ease_in_out_quint",
            Self::EaseInExpo => "ease_in_expo",
            Self::EaseOutExpo => "ease_out_expo",
            Self::EaseInOutExpo => "ease_in_out_expo",
            Self::EaseInCirc => "ease_in_circ",
            Self::EaseOutCirc => "ease_out_circ",
            Self::EaseInOutCirc => "ease_in_out_circ",
            Self::EaseInBack => "ease_in_back",
            Self::EaseOutBack => "ease_out_back",
            Self::EaseInOutBack => "ease_in_out_back",
            Self::EaseInElastic => "ease_in_elastic",
            Self::EaseOutElastic => "ease_out_elastic",
            Self::EaseInOutElastic => "ease_in_out_elastic",
            Self::EaseInBounce => "ease_in_bounce",
            Self::EaseOutBounce => "ease_out_bounce",
            Self::EaseInOutBounce => "ease_in_out_bounce",
        }
    }

    #[inline]
    pub fn family(self) -> CurveFamily {
        // Ordinals are grouped three per family in declaration order.
        match self.ordinal() / 3 {
            0 => CurveFamily::Sine,
            1 => CurveFamily::Quad,
            2 => CurveFamily::Cubic,
            3 => CurveFamily::Quart,
            4 => CurveFamily::Quint,
            5 => CurveFamily::Expo,
            6 => CurveFamily::Circ,
            7 => CurveFamily::Back,
            8 => CurveFamily::Elastic,
            _ => CurveFamily::Bounce,
        }
    }

    #[inline]
    pub fn kind(self) -> CurveKind {
        match self.ordinal() % 3 {
            0 => CurveKind::In,
            1 => CurveKind::Out,
            _ => CurveKind::InOut,
        }
    }

    /// Whether the curve is allowed to leave `[0, 1]`.
    #[inline]
    pub fn overshoots(self) -> bool {
        matches!(
            self.family(),
            CurveFamily::Back | CurveFamily::Elastic | CurveFamily::Bounce
        )
    }

    /// Evaluate the curve at progress `t`
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        crate::curve::registry::curve_fn(self)(t)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Curve::ALL
            .iter()
            .copied()
            .find(|curve| curve.name() == wanted)
            .ok_or_else(|| TweenError::UnknownCurve {
                name: s.to_string(),
            })
    }
}

impl TryFrom<u8> for Curve {
    type Error = TweenError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Curve::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(TweenError::CurveOrdinalOutOfRange {
                ordinal: ordinal as u32,
                max: (Curve::COUNT - 1) as u32,
            })
    }
}

impl From<Curve> for u8 {
    #[inline]
    fn from(curve: Curve) -> Self {
        curve.ordinal()
    }
}
