//! Static curve table.
//!
//! The table is a compile-time array of function pointers indexed by
//! [`Curve::ordinal`]. It is never mutated, so lookups from any thread are
//! free of synchronization and allocation.

use crate::curve::functions::*;
use crate::curve::types::Curve;

/// A pure easing curve: progress in, blend multiplier out.
pub type CurveFn = fn(f64) -> f64;

static CURVES: [CurveFn; Curve::COUNT] = [
    ease_in_sine,
    ease_out_sine,
    ease_in_out_sine,
    ease_in_quad,
    ease_out_quad,
    ease_in_out_quad,
    ease_in_cubic,
    ease_out_cubic,
    ease_in_out_cubic,
    ease_in_quart,
    ease_out_quart,
    ease_in_out_quart,
    ease_in_quint,
    ease_out_quint,
    ease_in_out_quint,
    ease_in_expo,
    ease_out_expo,
    ease_in_out_expo,
    ease_in_circ,
    ease_out_circ,
    ease_in_out_circ,
    ease_in_back,
    ease_out_back,
    ease_in_out_back,
    ease_in_elastic,
    ease_out_elastic,
    ease_in_out_elastic,
    ease_in_bounce,
    ease_out_bounce,
    ease_in_out_bounce,
];

/// Get the curve function for a selector
#[inline]
pub fn curve_fn(curve: Curve) -> CurveFn {
    CURVES[curve.ordinal() as usize]
}

/// Get the curve function for a raw ordinal.
///
/// Ordinals outside the table resolve to [`linear`] instead of failing.
#[inline]
pub fn curve_fn_raw(ordinal: usize) -> CurveFn {
    CURVES.get(ordinal).copied().unwrap_or(linear)
}

/// Get the curve function registered under a snake_case name
#[inline]
pub fn curve_fn_by_name(name: &str) -> Option<CurveFn> {
    name.parse::<Curve>().ok().map(curve_fn)
}

/// List all curve names in ordinal order
#[inline]
pub fn curve_names() -> impl Iterator<Item = &'static str> {
    Curve::ALL.iter().map(|curve| curve.name())
}
