//! Values that a [`Tween`](crate::Tween) can carry.
//!
//! A tweenable value is blended as `start + (end - start) * multiplier`.
//! Floats, integers, fixed-size arrays and small tuples work out of the box;
//! any type with `Add`, `Sub` and `Mul<f64>` can opt in through
//! [`impl_tweenable!`](crate::impl_tweenable).

use std::ops::{Add, Mul, Sub};

/// Trait for values that can be blended between two endpoints
pub trait Tweenable: Clone + PartialEq {
    /// Compute `start + (end - start) * multiplier`.
    ///
    /// `multiplier` is a curve output and may leave `[0, 1]`.
    fn blend(start: &Self, end: &Self, multiplier: f64) -> Self;
}

/// Blend through the arithmetic operators.
#[inline]
pub fn blend_ops<T>(start: &T, end: &T, multiplier: f64) -> T
where
    T: Clone + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    start.clone() + (end.clone() - start.clone()) * multiplier
}

/// Implement [`Tweenable`] for types with `Add`, `Sub` and `Mul<f64>`.
///
/// ```
/// use std::ops::{Add, Mul, Sub};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl Add for Point {
///     type Output = Point;
///     fn add(self, o: Point) -> Point {
///         Point { x: self.x + o.x, y: self.y + o.y }
///     }
/// }
///
/// impl Sub for Point {
///     type Output = Point;
///     fn sub(self, o: Point) -> Point {
///         Point { x: self.x - o.x, y: self.y - o.y }
///     }
/// }
///
/// impl Mul<f64> for Point {
///     type Output = Point;
///     fn mul(self, k: f64) -> Point {
///         Point { x: self.x * k, y: self.y * k }
///     }
/// }
///
/// tween_core::impl_tweenable!(Point);
///
/// use tween_core::Tweenable;
/// let mid = Point::blend(&Point { x: 0.0, y: 0.0 }, &Point { x: 2.0, y: 4.0 }, 0.5);
/// assert_eq!(mid, Point { x: 1.0, y: 2.0 });
/// ```
#[macro_export]
macro_rules! impl_tweenable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Tweenable for $ty {
                #[inline]
                fn blend(start: &Self, end: &Self, multiplier: f64) -> Self {
                    $crate::value::blend_ops(start, end, multiplier)
                }
            }
        )+
    };
}

impl Tweenable for f64 {
    #[inline]
    fn blend(start: &Self, end: &Self, multiplier: f64) -> Self {
        start + (end - start) * multiplier
    }
}

impl Tweenable for f32 {
    #[inline]
    fn blend(start: &Self, end: &Self, multiplier: f64) -> Self {
        let start = *start as f64;
        (start + (*end as f64 - start) * multiplier) as f32
    }
}

// Integers blend in f64 and truncate toward zero on the way back, the same
// as assigning a floating-point result to an integral variable. The cast
// saturates at the type bounds when a curve overshoots.
macro_rules! impl_tweenable_int {
    ($($ty:ty),+) => {
        $(
            impl Tweenable for $ty {
                #[inline]
                fn blend(start: &Self, end: &Self, multiplier: f64) -> Self {
                    let start = *start as f64;
                    (start + (*end as f64 - start) * multiplier) as $ty
                }
            }
        )+
    };
}

impl_tweenable_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Tweenable, const N: usize> Tweenable for [T; N] {
    #[inline]
    fn blend(start: &Self, end: &Self, multiplier: f64) -> Self {
        std::array::from_fn(|i| T::blend(&start[i], &end[i], multiplier))
    }
}

impl<A: Tweenable, B: Tweenable> Tweenable for (A, B) {
    #[inline]
    fn blend(start: &Self, end: &Self, multiplier: f64) -> Self {
        (
            A::blend(&start.0, &end.0, multiplier),
            B::blend(&start.1, &end.1, multiplier),
        )
    }
}

impl<A: Tweenable, B: Tweenable, C: Tweenable> Tweenable for (A, B, C) {
    #[inline]
    fn blend(start: &Self, end: &Self, multiplier: f64) -> Self {
        (
            A::blend(&start.0, &end.0, multiplier),
            B::blend(&start.1, &end.1, multiplier),
            C::blend(&start.2, &end.2, multiplier),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_float_blend() {
        assert_eq!(f64::blend(&0.0, &100.0, 0.5), 50.0);
        assert_abs_diff_eq!(f32::blend(&1.0, &3.0, 0.25), 1.5, epsilon = 1e-6);
        // overshoot is not clamped
        assert_eq!(f64::blend(&0.0, &10.0, 1.2), 12.0);
    }

    #[test]
    fn test_integer_blend_truncates() {
        assert_eq!(i32::blend(&0, &100, 0.505), 50);
        assert_eq!(i32::blend(&0, &-100, 0.505), -50);
        assert_eq!(u8::blend(&200, &100, 0.5), 150);
    }

    #[test]
    fn test_integer_blend_saturates_on_overshoot() {
        assert_eq!(u8::blend(&0, &255, 1.5), 255);
        assert_eq!(u8::blend(&10, &255, -0.5), 0);
    }

    #[test]
    fn test_array_and_tuple_blend() {
        let v = <[f64; 3]>::blend(&[0.0, 10.0, -4.0], &[2.0, 20.0, 4.0], 0.5);
        assert_eq!(v, [1.0, 15.0, 0.0]);

        let t = <(f64, i32)>::blend(&(0.0, 0), &(1.0, 10), 0.3);
        assert_abs_diff_eq!(t.0, 0.3, epsilon = 1e-12);
        assert_eq!(t.1, 3);
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Meters(f64);

    impl Add for Meters {
        type Output = Meters;
        fn add(self, other: Meters) -> Meters {
            Meters(self.0 + other.0)
        }
    }

    impl Sub for Meters {
        type Output = Meters;
        fn sub(self, other: Meters) -> Meters {
            Meters(self.0 - other.0)
        }
    }

    impl Mul<f64> for Meters {
        type Output = Meters;
        fn mul(self, k: f64) -> Meters {
            Meters(self.0 * k)
        }
    }

    crate::impl_tweenable!(Meters);

    #[test]
    fn test_operator_types_opt_in() {
        assert_eq!(Meters::blend(&Meters(2.0), &Meters(6.0), 0.25), Meters(3.0));
    }
}
