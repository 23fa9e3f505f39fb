//! # Traits
//!
//! The number trait used by the tableau and the pivot rules. Its contract is "mathematically
//! exact", but floating point implementations aren't. That is why every comparison against zero
//! made by the algorithm goes through a tolerance, which is zero for the exact types.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// The simplex algorithm is defined over the ordered fields.
///
/// Only owned arithmetic is required, such that both `Copy` floats and heap allocated rationals
/// can implement this trait.
pub trait Scalar:
    Zero +
    One +
    Neg<Output=Self> +
    Add<Self, Output=Self> +
    Sub<Self, Output=Self> +
    Mul<Self, Output=Self> +
    Div<Self, Output=Self> +
    PartialEq +
    PartialOrd +
    Clone +
    Display +
    Debug +
{
    /// Absolute tolerance used when a value is compared against zero or one.
    fn default_tolerance() -> Self;

    /// Whether this value is an actual (not infinite, not NaN) number.
    fn is_finite(&self) -> bool {
        true
    }

    /// Whether this value is smaller than `-tolerance`.
    fn is_negative_beyond(&self, tolerance: &Self) -> bool {
        *self < -tolerance.clone()
    }

    /// Whether this value is larger than `tolerance`.
    fn is_positive_beyond(&self, tolerance: &Self) -> bool {
        self > tolerance
    }

    /// Absolute value.
    fn magnitude(&self) -> Self {
        if *self < Self::zero() { -self.clone() } else { self.clone() }
    }

    /// Whether this value lies within `tolerance` of `other`.
    fn is_close_to(&self, other: &Self, tolerance: &Self) -> bool {
        let difference = self.clone() - other.clone();
        !difference.is_negative_beyond(tolerance) && !difference.is_positive_beyond(tolerance)
    }
}

impl Scalar for f64 {
    fn default_tolerance() -> Self {
        1e-9
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Scalar for f32 {
    fn default_tolerance() -> Self {
        1e-5
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

/// Exact arithmetic: no rounding errors accumulate, so no tolerance is needed.
#[cfg(feature = "exact")]
impl Scalar for relp_num::RationalBig {
    fn default_tolerance() -> Self {
        Self::zero()
    }
}
