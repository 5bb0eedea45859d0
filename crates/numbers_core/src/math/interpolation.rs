//! Clamped linear interpolation.
//!
//! Both functions are generic over `T: num_traits::Float` so they work for
//! `f32` and `f64` alike.

use num_traits::Float;

/// Restricts `x` to the closed interval `[min, max]`.
///
/// A NaN `x` collapses to `min`.
///
/// # Examples
/// ```
/// use numbers_core::math::interpolation::clamp;
///
/// assert_eq!(clamp(1.5_f64, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-0.5_f64, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.25_f64, 0.0, 1.0), 0.25);
/// ```
#[inline]
pub fn clamp<T: Float>(x: T, min: T, max: T) -> T {
    x.max(min).min(max)
}

/// Linear interpolation between `a` and `b` with `t` clamped to `[0, 1]`.
///
/// # Mathematical Definition
/// ```text
/// lerp(a, b, t) = a + (b - a) * clamp(t, 0, 1)
/// ```
///
/// # Examples
/// ```
/// use numbers_core::math::interpolation::lerp;
///
/// assert_eq!(lerp(1.0_f64, 6.0, 0.5), 3.5);
/// assert_eq!(lerp(1.0_f64, 6.0, 2.0), 6.0);
/// assert_eq!(lerp(1.0_f64, 6.0, -1.0), 1.0);
/// ```
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * clamp(t, T::zero(), T::one())
}
