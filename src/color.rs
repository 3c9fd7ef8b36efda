//! The scalar and triple types every color notation is built from.

use std::ops::{Add, Mul, Sub};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
///
/// Arithmetic is component-wise and never clamps, so differences and weighted
/// sums are free to leave the nominal range of the notation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Combine these components with `other`, pairing them up position by
    /// position.
    pub fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(Component, Component) -> Component,
    ) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }
}

impl Add for Components {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Mul for Components {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a * b)
    }
}

impl From<(Component, Component, Component)> for Components {
    fn from((c0, c1, c2): (Component, Component, Component)) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<Components> for (Component, Component, Component) {
    fn from(value: Components) -> Self {
        (value.0, value.1, value.2)
    }
}
