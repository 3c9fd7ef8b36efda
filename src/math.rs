//! Math utility functions.

use num_traits::Float;

/// Linear interpolation from `a` to `b` by `t`. `t` is not limited to the unit
/// interval.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Bring `t` back into the unit interval by adding or subtracting one. Only a
/// single step is taken, values more than one unit outside stay outside.
pub fn wrap_once<T: Float>(t: T) -> T {
    if t < T::zero() {
        t + T::one()
    } else if t > T::one() {
        t - T::one()
    } else {
        t
    }
}

/// Split `x` into its floor and the fractional distance above it.
pub fn split_floor<T: Float>(x: T) -> (T, T) {
    let whole = x.floor();
    (whole, x - whole)
}
