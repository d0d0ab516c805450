//! A two-dimensional vector that behaves like a number.
//!
//! `+` adds component-wise, `*` scales by a scalar, [`Vector::abs`] gives the
//! magnitude and [`Vector::is_zero`] tells whether the vector is falsy.

use core::fmt;
use core::ops::{Add, Mul, Neg};

/// A Euclidean vector in the plane.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

#[cfg(feature = "std")]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

impl Vector {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the magnitude of the vector.
    ///
    /// ```
    /// use frenchdeck::Vector;
    ///
    /// assert_eq!(Vector::new(3.0, 4.0).abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(self) -> f64 {
        hypot(self.x, self.y)
    }

    /// Returns whether the magnitude is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.abs() == 0.0
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn arithmetic() {
        let v = Vector::new(2.0, 4.0) + Vector::new(2.0, 1.0);
        assert_eq!(v, Vector::new(4.0, 5.0));
        assert_eq!(Vector::new(3.0, 4.0) * 3.0, Vector::new(9.0, 12.0));
        assert_eq!(-Vector::new(1.0, -2.0), Vector::new(-1.0, 2.0));
        assert_eq!((Vector::new(3.0, 4.0) * 3.0).abs(), 15.0);
    }

    #[test]
    fn zero_vector_is_falsy() {
        assert!(Vector::default().is_zero());
        assert!(!Vector::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn representations() {
        let v = Vector::new(3.0, 4.0);
        assert_eq!(format!("{v:?}"), "Vector(3.0, 4.0)");
        assert_eq!(format!("{v}"), "(3, 4)");
    }
}
