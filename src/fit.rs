//! Interpolation: Vandermonde system construction and exact-pivot solving.
//!
//! The pipeline here is deliberately small and deterministic:
//!
//! 1. [`vandermonde_system`] turns the first `degree + 1` points into the
//!    square system `A * c = b`, with every power computed exactly over
//!    [`Integer`] before anything touches a float.
//! 2. [`solve_system`] runs Gaussian elimination with partial pivoting
//!    over [`Real`] and back-substitutes the coefficient vector.
//! 3. [`FitRequest`] wires the two together for a [`PointSet`], and
//!    [`reconstruct`] runs the whole record-to-polynomial pipeline.
//!
//! Everything is request-local: a fit owns its matrix and vector, nothing
//! is shared or retained after the call, and the same input always yields
//! bit-identical coefficients.

use nalgebra::{DMatrix, DVector};
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::point::{DecodedPoint, PointSet, Skipped};
use crate::polynomial::PolynomialResult;
use crate::record::ShareRecord;
use crate::value::{Integer, Real};

/// Working precision floor, in bits.
const MIN_PRECISION: usize = 128;

/// Headroom added on top of the magnitude estimate, in bits.
const PRECISION_MARGIN: usize = 64;

/// Sizes the working precision for a fit.
///
/// The widest value the system can produce is on the order of
/// `max(x)^degree * max(|y|)`, so the precision is the bit length of that
/// bound plus headroom for the elimination arithmetic, floored at
/// [`MIN_PRECISION`].
fn working_precision(points: &[DecodedPoint], degree: usize) -> usize {
    let x_bits = points
        .iter()
        .map(|p| Integer::from(p.x()).bit_len())
        .max()
        .unwrap_or(1)
        .max(1);
    let y_bits = points
        .iter()
        .map(|p| p.y().bit_len())
        .max()
        .unwrap_or(1)
        .max(1);
    ((degree + 1) * x_bits + y_bits + PRECISION_MARGIN).max(MIN_PRECISION)
}

/// Builds the interpolation system for the given points and degree.
///
/// Selects exactly the first `degree + 1` points by ascending x; extra
/// points are ignored, which keeps the selection deterministic and
/// reproducible. Row `i` of the matrix is `[x_i^0, x_i^1, .., x_i^degree]`
/// and the right-hand side is `y_i`. Powers are computed exactly over
/// [`Integer`] and only then converted to [`Real`] at `precision` bits, so
/// no division or rounding happens before the system exists.
///
/// # Errors
/// [`Error::InsufficientPoints`] if fewer than `degree + 1` points are
/// available.
pub fn vandermonde_system(
    points: &[DecodedPoint],
    degree: usize,
    precision: usize,
) -> Result<(DMatrix<Real>, DVector<Real>)> {
    let size = degree + 1;
    if points.len() < size {
        return Err(Error::InsufficientPoints {
            available: points.len(),
            required: size,
        });
    }
    let selected = &points[..size];

    let matrix = DMatrix::from_fn(size, size, |row, col| {
        let power = Integer::from(selected[row].x()).pow(col);
        Real::from_integer(&power, precision)
    });
    let rhs = DVector::from_iterator(
        size,
        selected.iter().map(|p| Real::from_integer(p.y(), precision)),
    );
    Ok((matrix, rhs))
}

/// Solves `A * c = b` by Gaussian elimination with partial pivoting.
///
/// The matrix is augmented with `b` and eliminated in place. For each
/// pivot column the largest-magnitude candidate among the remaining rows
/// is swapped into the pivot position; a pivot of exactly zero means the
/// system is singular. Over exact binary big-floats a zero pivot only
/// arises from exact cancellation, so no epsilon threshold is involved.
///
/// Returns the solution in ascending order: `solution[0]` is the
/// coefficient of `x^0`. The solve is deterministic, so re-running it on a
/// copy of the same system yields bit-identical output.
///
/// # Errors
/// [`Error::SingularSystem`] naming the pivot column that had no non-zero
/// candidate.
///
/// # Panics
/// Panics if `a` is not square with side `b.len()`.
pub fn solve_system(a: &DMatrix<Real>, b: &DVector<Real>) -> Result<Vec<Real>> {
    let n = b.len();
    assert_eq!(a.nrows(), n, "matrix must be square with side b.len()");
    assert_eq!(a.ncols(), n, "matrix must be square with side b.len()");

    // Augmented [A | b], eliminated in place.
    let mut m = DMatrix::from_fn(n, n + 1, |row, col| {
        if col < n {
            a[(row, col)].clone()
        } else {
            b[row].clone()
        }
    });

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if m[(row, col)].magnitude() > m[(pivot, col)].magnitude() {
                pivot = row;
            }
        }
        if m[(pivot, col)].is_zero() {
            return Err(Error::SingularSystem { column: col });
        }
        if pivot != col {
            m.swap_rows(pivot, col);
        }

        for row in col + 1..n {
            if m[(row, col)].is_zero() {
                continue;
            }
            let factor = m[(row, col)].clone() / m[(col, col)].clone();
            for j in col..=n {
                let delta = factor.clone() * m[(col, j)].clone();
                m[(row, j)] = m[(row, j)].clone() - delta;
            }
        }
    }

    // Back substitution, last row upward. `solution` is built in reverse
    // (highest row first) and flipped at the end.
    let mut solution: Vec<Real> = Vec::with_capacity(n);
    for row in (0..n).rev() {
        let mut acc = m[(row, n)].clone();
        for col in row + 1..n {
            let known = solution[n - 1 - col].clone();
            acc = acc - m[(row, col)].clone() * known;
        }
        solution.push(acc / m[(row, row)].clone());
    }
    solution.reverse();
    Ok(solution)
}

/// A single polynomial reconstruction request.
///
/// Owns its point set; nothing is shared across requests, so independent
/// requests can run on separate threads with no coordination.
///
/// # Example
/// ```
/// # use polyrecover::{EncodedPoint, FitRequest, Integer, PointSet};
/// let assembly = PointSet::assemble([
///     EncodedPoint::new(1, 10, "1"),
///     EncodedPoint::new(2, 2, "111"),
///     EncodedPoint::new(3, 10, "12"),
/// ]);
/// let poly = FitRequest::new(assembly.points, 2).solve().unwrap();
/// assert_eq!(poly.constant_as_integer(), Integer::new(-6));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FitRequest {
    points: PointSet,
    degree: usize,
    precision: Option<usize>,
}

impl FitRequest {
    /// Creates a fit request for the given points and target degree.
    #[must_use]
    pub fn new(points: PointSet, degree: usize) -> Self {
        Self {
            points,
            degree,
            precision: None,
        }
    }

    /// Overrides the working precision, in bits.
    ///
    /// By default the precision is sized from the inputs (degree times the
    /// bit length of the widest abscissa, plus the widest ordinate, plus
    /// headroom). Raise it if you need tighter tolerances on non-integer
    /// coefficients.
    #[must_use]
    pub fn with_precision(mut self, bits: usize) -> Self {
        self.precision = Some(bits);
        self
    }

    /// The point set backing this request.
    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// The target polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Builds and solves the interpolation system.
    ///
    /// # Errors
    /// - [`Error::InsufficientPoints`] if fewer than `degree + 1` points
    ///   are available.
    /// - [`Error::SingularSystem`] if elimination stalls on a zero pivot
    ///   (duplicated abscissas).
    pub fn solve(&self) -> Result<PolynomialResult> {
        let points = self.points.points();
        let precision = self
            .precision
            .unwrap_or_else(|| working_precision(points, self.degree));
        let (matrix, rhs) = vandermonde_system(points, self.degree, precision)?;
        let ascending = solve_system(&matrix, &rhs)?;
        Ok(PolynomialResult::from_ascending(ascending))
    }
}

/// The outcome of a full record reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// The reconstructed polynomial.
    pub polynomial: PolynomialResult,
    /// Shares dropped on the way in (bad keys, bases, or digits).
    pub skipped: Vec<Skipped>,
}

/// Reconstructs the polynomial described by a share record.
///
/// Runs the whole pipeline: entry conversion, per-share decoding (failures
/// are skipped and reported, never fatal), assembly, and a degree-`k - 1`
/// fit over the first `k` usable points by ascending x.
///
/// # Example
/// ```
/// # use polyrecover::{reconstruct, Integer, ShareEntry, ShareKeys, ShareRecord};
/// let record = ShareRecord::new(
///     ShareKeys { n: 3, k: 3 },
///     [
///         ("1".to_string(), ShareEntry::new("10", "4")),
///         ("2".to_string(), ShareEntry::new("10", "7")),
///         ("3".to_string(), ShareEntry::new("10", "12")),
///     ]
///     .into(),
/// );
/// let result = reconstruct(&record).unwrap();
/// // y = x^2 + 3: the secret is the constant term
/// assert_eq!(result.polynomial.constant_as_integer(), Integer::new(3));
/// ```
///
/// # Errors
/// - [`Error::InsufficientPoints`] if fewer than `k` shares survive
///   decoding.
/// - [`Error::SingularSystem`] if the usable shares do not form a solvable
///   system.
pub fn reconstruct(record: &ShareRecord) -> Result<Reconstruction> {
    let (encoded, mut skipped) = record.encoded_points();
    let assembly = PointSet::assemble(encoded);
    skipped.extend(assembly.skipped);

    let polynomial = FitRequest::new(assembly.points, record.degree()).solve()?;
    Ok(Reconstruction {
        polynomial,
        skipped,
    })
}
