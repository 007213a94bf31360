//! Closed-form easing curves.
//!
//! Every function maps normalized progress `t` in `[0, 1]` to a blend
//! multiplier. The back, elastic and bounce families leave `[0, 1]` on
//! purpose (overshoot and rebound), so callers must not clamp the result.

use std::f64::consts::PI;

#[inline]
fn exp2(x: f64) -> f64 {
    2.0_f64.powf(x)
}

/// Identity curve, also the fallback for unknown selectors.
#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

// ---------------------------------------------------------------------------
// sine
// ---------------------------------------------------------------------------

#[inline]
pub fn ease_in_sine(t: f64) -> f64 {
    1.0 - ((t * PI) / 2.0).cos()
}

#[inline]
pub fn ease_out_sine(t: f64) -> f64 {
    ((t * PI) / 2.0).sin()
}

#[inline]
pub fn ease_in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

// ---------------------------------------------------------------------------
// polynomial: quad, cubic, quart, quint
// ---------------------------------------------------------------------------

#[inline]
pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[inline]
pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

#[inline]
pub fn ease_in_quart(t: f64) -> f64 {
    t * t * t * t
}

#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 - u * u * u * u
}

#[inline]
pub fn ease_in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 - 8.0 * u * u * u * u
    }
}

#[inline]
pub fn ease_in_quint(t: f64) -> f64 {
    t * t * t * t * t
}

#[inline]
pub fn ease_out_quint(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 + u * u * u * u * u
}

#[inline]
pub fn ease_in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 + 16.0 * u * u * u * u * u
    }
}

// ---------------------------------------------------------------------------
// expo
// ---------------------------------------------------------------------------

#[inline]
pub fn ease_in_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        exp2(10.0 * t - 10.0)
    }
}

#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - exp2(-10.0 * t)
    }
}

#[inline]
pub fn ease_in_out_expo(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }

    if t < 0.5 {
        return 0.5 * exp2((20.0 * t) - 10.0);
    }

    -0.5 * exp2((-20.0 * t) + 10.0) + 1.0
}

// ---------------------------------------------------------------------------
// circ
// ---------------------------------------------------------------------------

#[inline]
pub fn ease_in_circ(t: f64) -> f64 {
    1.0 - (1.0 - (t * t)).sqrt()
}

#[inline]
pub fn ease_out_circ(t: f64) -> f64 {
    let u = t - 1.0;
    (1.0 - u * u).sqrt()
}

#[inline]
pub fn ease_in_out_circ(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - (1.0 - 4.0 * (t * t)).sqrt()) * 0.5
    } else {
        let k = -2.0 * t + 2.0;
        ((1.0 - k * k).sqrt() + 1.0) * 0.5
    }
}

// ---------------------------------------------------------------------------
// elastic (13 half-periods of oscillation under an exponential envelope)
// ---------------------------------------------------------------------------

#[inline]
pub fn ease_in_elastic(t: f64) -> f64 {
    (13.0 * (PI / 2.0) * t).sin() * exp2(10.0 * (t - 1.0))
}

#[inline]
pub fn ease_out_elastic(t: f64) -> f64 {
    (-13.0 * (PI / 2.0) * (t + 1.0)).sin() * exp2(-10.0 * t) + 1.0
}

#[inline]
pub fn ease_in_out_elastic(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * (13.0 * (PI / 2.0) * (2.0 * t)).sin() * exp2(10.0 * (2.0 * t - 1.0))
    } else {
        0.5 * ((-13.0 * (PI / 2.0) * ((2.0 * t - 1.0) + 1.0)).sin()
            * exp2(-10.0 * (2.0 * t - 1.0))
            + 2.0)
    }
}

// ---------------------------------------------------------------------------
// back
// ---------------------------------------------------------------------------

#[inline]
pub fn ease_in_back(t: f64) -> f64 {
    t * t * t - t * (t * PI).sin()
}

#[inline]
pub fn ease_out_back(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 + u * u * u + u * (u * PI).sin()
}

/// Halves of [`ease_in_back`] and [`ease_out_back`] scaled by one half,
/// evaluated at the raw `t`. The jump at `t = 0.5` is part of the curve.
#[inline]
pub fn ease_in_out_back(t: f64) -> f64 {
    if t < 0.5 {
        (t * t * t - t * (t * PI).sin()) * 0.5
    } else {
        let u = t - 1.0;
        (1.0 + u * u * u + u * (u * PI).sin()) * 0.5
    }
}

// ---------------------------------------------------------------------------
// bounce
// ---------------------------------------------------------------------------

#[inline]
pub fn ease_in_bounce(t: f64) -> f64 {
    exp2(6.0 * (t - 1.0)) * (t * PI * 3.5).sin().abs()
}

#[inline]
pub fn ease_out_bounce(t: f64) -> f64 {
    1.0 - exp2(-6.0 * t) * (t * PI * 3.5).cos().abs()
}

#[inline]
pub fn ease_in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * exp2(8.0 * (t - 1.0)) * (t * PI * 7.0).sin().abs()
    } else {
        1.0 - 8.0 * exp2(-8.0 * t) * (t * PI * 7.0).sin().abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quad_midpoint() {
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_quad(0.5), 0.25);
        assert_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn test_in_out_polynomials_are_symmetric() {
        for &t in &[0.1, 0.2, 0.3, 0.4] {
            assert_abs_diff_eq!(ease_in_out_cubic(t), 1.0 - ease_in_out_cubic(1.0 - t), epsilon = 1e-12);
            assert_abs_diff_eq!(ease_in_out_quart(t), 1.0 - ease_in_out_quart(1.0 - t), epsilon = 1e-12);
            assert_abs_diff_eq!(ease_in_out_quint(t), 1.0 - ease_in_out_quint(1.0 - t), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_expo_guards() {
        assert_eq!(ease_in_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_in_out_expo(0.0), 0.0);
        assert_eq!(ease_in_out_expo(1.0), 1.0);
        assert_abs_diff_eq!(ease_in_out_expo(0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_back_overshoots_below_zero() {
        // in-back dips negative before heading to 1
        assert!(ease_in_back(0.3) < 0.0);
        assert!(ease_out_back(0.7) > 1.0);
    }

    #[test]
    fn test_elastic_endpoints() {
        assert_abs_diff_eq!(ease_in_elastic(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ease_in_elastic(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ease_out_elastic(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ease_out_elastic(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounce_stays_in_unit_range() {
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let v = ease_out_bounce(t);
            assert!((0.0..=1.0).contains(&v), "out_bounce({t}) = {v}");
        }
    }
}
