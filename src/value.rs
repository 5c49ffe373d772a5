//! Arbitrary-precision numeric types backing the solver.
//!
//! This module wraps `dashu`'s big numbers in two newtypes:
//!
//! - [`Integer`]: an exact arbitrary-precision integer. Decoded ordinates
//!   and Vandermonde powers live here, so intermediate products can never
//!   overflow or round.
//! - [`Real`]: an arbitrary-precision binary float carrying an explicit
//!   working precision in bits. The elimination stage runs over this type;
//!   every `Real` entering the solver is created through
//!   [`Real::from_integer`] so that the working precision propagates
//!   through every operation.
//!
//! The wrappers expose only the operations the pipeline needs: ring ops,
//! comparison, absolute value, bit length, exact powers, and rounding back
//! to [`Integer`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use dashu::base::BitTest;
use dashu::float::FBig;
use dashu::integer::IBig;
use num_traits::{One, Zero};

/// An exact arbitrary-precision integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an `i64`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.0 < IBig::ZERO {
            Self(-self.0.clone())
        } else {
            self.clone()
        }
    }

    /// Raises the value to a non-negative integer power, exactly.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        Self(self.0.pow(exp))
    }

    /// Returns the number of bits needed to represent the magnitude.
    ///
    /// Zero reports a bit length of 0.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Borrows the underlying [`IBig`].
    #[must_use]
    pub fn as_ibig(&self) -> &IBig {
        &self.0
    }

    /// Unwraps into the underlying [`IBig`].
    #[must_use]
    pub fn into_ibig(self) -> IBig {
        self.0
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Integer {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Integer {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }
}

/// An arbitrary-precision binary float with an explicit working precision.
///
/// Precision propagates through arithmetic: combining two values yields a
/// result at the larger of their precisions, so seeding every solver input
/// through [`Real::from_integer`] keeps the whole elimination at the
/// requested width.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Real(FBig);

impl Real {
    /// Creates a `Real` from an exact integer at the given precision in bits.
    ///
    /// Values wider than `precision` bits are rounded; the working
    /// precision chosen by the fit layer is sized so that this never
    /// happens for in-range inputs.
    #[must_use]
    pub fn from_integer(value: &Integer, precision: usize) -> Self {
        Self(FBig::from(value.0.clone()).with_precision(precision).value())
    }

    /// Creates a `Real` from a `u64` at the given precision in bits.
    #[must_use]
    pub fn from_u64(value: u64, precision: usize) -> Self {
        Self::from_integer(&Integer::from(value), precision)
    }

    /// Creates a `Real` from an `i64` at the given precision in bits.
    #[must_use]
    pub fn from_i64(value: i64, precision: usize) -> Self {
        Self::from_integer(&Integer::from(value), precision)
    }

    /// Returns the working precision of this value in bits.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.0.precision()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn magnitude(&self) -> Self {
        // FBig::ZERO needs a typed binding: FBig compares across rounding
        // modes, so the constant's mode is ambiguous in comparison position
        let zero: FBig = FBig::ZERO;
        if self.0 < zero {
            Self(-self.0.clone())
        } else {
            self.clone()
        }
    }

    /// Rounds to the nearest integer, ties away from zero.
    #[must_use]
    pub fn round(&self) -> Integer {
        let zero: FBig = FBig::ZERO;
        let half = FBig::from(1u8) / FBig::from(2u8);
        let shifted = if self.0 < zero {
            self.0.clone() - half
        } else {
            self.0.clone() + half
        };
        Integer(shifted.to_int().value())
    }

    /// Converts to `f64`, rounding to the nearest representable value.
    ///
    /// Values beyond `f64` range saturate to infinity; the conversion is
    /// lossy by nature and meant for display and tolerance checks only.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Borrows the underlying [`FBig`].
    #[must_use]
    pub fn as_fbig(&self) -> &FBig {
        &self.0
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Real {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Real {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Real {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Real {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Real {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for Real {
    fn zero() -> Self {
        Self(FBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        let zero: FBig = FBig::ZERO;
        self.0 == zero
    }
}
