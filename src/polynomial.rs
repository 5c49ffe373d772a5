//! The reconstructed polynomial.
//!
//! [`PolynomialResult`] owns the solved coefficient vector, stored highest
//! degree first, and exposes the constant term separately since that is
//! usually the value the caller is actually after (in threshold
//! reconstruction the constant term *is* the secret).

use std::fmt;

use crate::value::{Integer, Real};

/// The solved coefficient vector, highest degree first.
///
/// Owned exclusively by the caller; the solver keeps no reference to it.
/// The vector is never empty: a degree-`d` fit produces `d + 1`
/// coefficients, and degree 0 still has its constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialResult {
    /// Coefficients, highest degree first. Invariant: non-empty.
    coefficients: Vec<Real>,
}

impl PolynomialResult {
    /// Wraps a solver output given in ascending order (`x^0` first).
    ///
    /// # Panics
    /// Panics if `ascending` is empty; the solver always produces at least
    /// the constant term.
    #[must_use]
    pub(crate) fn from_ascending(mut ascending: Vec<Real>) -> Self {
        assert!(!ascending.is_empty(), "a polynomial has at least one coefficient");
        ascending.reverse();
        Self {
            coefficients: ascending,
        }
    }

    /// The polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[Real] {
        &self.coefficients
    }

    /// The constant term, i.e. the coefficient of `x^0`.
    #[must_use]
    pub fn constant_term(&self) -> &Real {
        &self.coefficients[self.coefficients.len() - 1]
    }

    /// The constant term rounded to the nearest integer.
    ///
    /// For inputs sampled from a polynomial with integer coefficients the
    /// working precision guarantees the rounded value is exact.
    #[must_use]
    pub fn constant_as_integer(&self) -> Integer {
        self.constant_term().round()
    }

    /// All coefficients rounded to the nearest integer, highest degree
    /// first.
    #[must_use]
    pub fn rounded_coefficients(&self) -> Vec<Integer> {
        self.coefficients.iter().map(Real::round).collect()
    }

    /// All coefficients as `f64` approximations, highest degree first.
    ///
    /// Lossy by nature; meant for display and tolerance checks.
    #[must_use]
    pub fn coefficients_f64(&self) -> Vec<f64> {
        self.coefficients.iter().map(Real::to_f64).collect()
    }

    /// Evaluates the polynomial at an integer abscissa by Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: &Integer) -> Real {
        let precision = self
            .coefficients
            .iter()
            .map(Real::precision)
            .max()
            .unwrap_or(64)
            .max(64);
        let x = Real::from_integer(x, precision);
        let mut iter = self.coefficients.iter();
        // Invariant: coefficients is non-empty
        let mut acc = iter.next().cloned().unwrap_or_else(num_traits::Zero::zero);
        for c in iter {
            acc = acc * x.clone() + c.clone();
        }
        acc
    }
}

impl fmt::Display for PolynomialResult {
    /// Formats as `a x^2 + b x + c`, skipping zero terms, with `f64`
    /// approximations of the coefficients.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut printed_any = false;
        for (i, coef) in self.coefficients.iter().enumerate() {
            let power = degree - i;
            let value = coef.to_f64();
            if value == 0.0 && degree > 0 {
                continue;
            }

            if printed_any {
                if value < 0.0 {
                    write!(f, " - ")?;
                } else {
                    write!(f, " + ")?;
                }
            } else if value < 0.0 {
                write!(f, "-")?;
            }

            let magnitude = value.abs();
            match power {
                0 => write!(f, "{magnitude}")?,
                1 => write!(f, "{magnitude} x")?,
                _ => write!(f, "{magnitude} x^{power}")?,
            }
            printed_any = true;
        }
        if !printed_any {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(ascending: &[i64]) -> PolynomialResult {
        PolynomialResult::from_ascending(
            ascending.iter().map(|&c| Real::from_i64(c, 128)).collect(),
        )
    }

    #[test]
    fn orders_highest_degree_first() {
        // Solver order: [c, b, a] for y = a x^2 + b x + c
        let p = poly(&[5, -3, 2]);
        assert_eq!(p.degree(), 2);
        assert_eq!(
            p.rounded_coefficients(),
            vec![Integer::new(2), Integer::new(-3), Integer::new(5)]
        );
        assert_eq!(p.constant_as_integer(), Integer::new(5));
    }

    #[test]
    fn constant_term_is_the_last_coefficient() {
        let p = poly(&[7]);
        assert_eq!(p.degree(), 0);
        assert_eq!(p.constant_term(), &Real::from_i64(7, 128));
    }

    #[test]
    fn evaluates_by_horner() {
        // y = 2x^2 - 3x + 5
        let p = poly(&[5, -3, 2]);
        assert_eq!(p.evaluate(&Integer::new(0)).round(), Integer::new(5));
        assert_eq!(p.evaluate(&Integer::new(1)).round(), Integer::new(4));
        assert_eq!(p.evaluate(&Integer::new(10)).round(), Integer::new(175));
        assert_eq!(p.evaluate(&Integer::new(-2)).round(), Integer::new(19));
    }

    #[test]
    fn displays_in_conventional_form() {
        assert_eq!(poly(&[5, -3, 2]).to_string(), "2 x^2 - 3 x + 5");
        assert_eq!(poly(&[-6, 0, 1]).to_string(), "1 x^2 - 6");
        assert_eq!(poly(&[7]).to_string(), "7");
        assert_eq!(poly(&[0]).to_string(), "0");
        assert_eq!(poly(&[1, 2]).to_string(), "2 x + 1");
    }
}
