//! Encoded and decoded sample points.
//!
//! An [`EncodedPoint`] is one share as it arrives from ingestion: an
//! abscissa (the share key) plus a `(base, digits)` encoded ordinate.
//! [`PointSet::assemble`] decodes a batch of them into a [`PointSet`] of
//! [`DecodedPoint`]s, sorted ascending by x.
//!
//! Assembly is deliberately lenient: a share that fails to decode is
//! dropped from the set and reported in [`Assembly::skipped`], it never
//! aborts the shares that did decode. Whether the survivors are still
//! enough to fit the polynomial is the fit layer's decision.

use crate::decode::decode;
use crate::error::Error;
use crate::value::Integer;

/// One share as received: an abscissa and a base-encoded ordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPoint {
    /// The abscissa; share keys double as x values.
    pub x: u64,
    /// The declared radix of `digits`, 2 or above.
    pub base: u32,
    /// The encoded ordinate, most significant digit first.
    pub digits: String,
}

impl EncodedPoint {
    /// Creates a new encoded point.
    #[must_use]
    pub fn new(x: u64, base: u32, digits: impl Into<String>) -> Self {
        Self {
            x,
            base,
            digits: digits.into(),
        }
    }
}

/// One successfully decoded sample point. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPoint {
    x: u64,
    y: Integer,
}

impl DecodedPoint {
    /// Creates a decoded point from an abscissa and an exact ordinate.
    #[must_use]
    pub fn new(x: u64, y: Integer) -> Self {
        Self { x, y }
    }

    /// The abscissa.
    #[must_use]
    pub fn x(&self) -> u64 {
        self.x
    }

    /// The decoded ordinate.
    #[must_use]
    pub fn y(&self) -> &Integer {
        &self.y
    }
}

/// A share that assembly dropped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// The share key as it appeared in the input.
    pub key: String,
    /// Why the share was dropped.
    pub error: Error,
}

/// The outcome of assembling a batch of encoded points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// The points that decoded successfully, sorted ascending by x.
    pub points: PointSet,
    /// The shares that were dropped, in input order.
    pub skipped: Vec<Skipped>,
}

/// A validated, x-sorted collection of decoded points, ready for fitting.
///
/// Share keys are unique in a well-formed record, so x values are unique
/// here too; a duplicated abscissa is not rejected at this stage but will
/// surface as a singular system if it ends up in the selected subset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointSet(Vec<DecodedPoint>);

impl PointSet {
    /// Builds a point set from already-decoded points, sorting by x.
    #[must_use]
    pub fn from_points(mut points: Vec<DecodedPoint>) -> Self {
        points.sort_by_key(DecodedPoint::x);
        Self(points)
    }

    /// Decodes every encoded point independently.
    ///
    /// Shares that fail to decode are dropped and reported in
    /// [`Assembly::skipped`]; the remaining shares always assemble.
    ///
    /// # Examples
    /// ```
    /// # use polyrecover::{EncodedPoint, PointSet};
    /// let assembly = PointSet::assemble([
    ///     EncodedPoint::new(1, 10, "1"),
    ///     EncodedPoint::new(2, 2, "151"), // '5' is not a binary digit
    /// ]);
    /// assert_eq!(assembly.points.len(), 1);
    /// assert_eq!(assembly.skipped.len(), 1);
    /// ```
    #[must_use]
    pub fn assemble(encoded: impl IntoIterator<Item = EncodedPoint>) -> Assembly {
        let mut points = Vec::new();
        let mut skipped = Vec::new();
        for share in encoded {
            match decode(&share.digits, share.base) {
                Ok(y) => points.push(DecodedPoint::new(share.x, y)),
                Err(error) => skipped.push(Skipped {
                    key: share.x.to_string(),
                    error,
                }),
            }
        }
        Assembly {
            points: Self::from_points(points),
            skipped,
        }
    }

    /// The decoded points, ascending by x.
    #[must_use]
    pub fn points(&self) -> &[DecodedPoint] {
        &self.0
    }

    /// Iterates over the decoded points, ascending by x.
    pub fn iter(&self) -> std::slice::Iter<'_, DecodedPoint> {
        self.0.iter()
    }

    /// Number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a DecodedPoint;
    type IntoIter = std::slice::Iter<'a, DecodedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_reference_shares() {
        let assembly = PointSet::assemble([
            EncodedPoint::new(1, 10, "1"),
            EncodedPoint::new(2, 2, "111"),
            EncodedPoint::new(3, 10, "12"),
            EncodedPoint::new(6, 4, "213"),
        ]);

        assert!(assembly.skipped.is_empty());
        let ys: Vec<_> = assembly
            .points
            .iter()
            .map(|p| (p.x(), p.y().clone()))
            .collect();
        assert_eq!(
            ys,
            vec![
                (1, Integer::new(1)),
                (2, Integer::new(7)),
                (3, Integer::new(12)),
                (6, Integer::new(39)),
            ]
        );
    }

    #[test]
    fn decode_failure_drops_only_the_offending_share() {
        let assembly = PointSet::assemble([
            EncodedPoint::new(1, 10, "4"),
            EncodedPoint::new(2, 2, "5"),
            EncodedPoint::new(3, 1, "0"),
            EncodedPoint::new(4, 10, "11"),
        ]);

        assert_eq!(assembly.points.len(), 2);
        assert_eq!(assembly.skipped.len(), 2);
        assert_eq!(assembly.skipped[0].key, "2");
        assert!(matches!(
            assembly.skipped[0].error,
            Error::InvalidDigit { .. }
        ));
        assert_eq!(assembly.skipped[1].key, "3");
        assert!(matches!(assembly.skipped[1].error, Error::InvalidBase { .. }));
    }

    #[test]
    fn points_are_sorted_by_x() {
        let assembly = PointSet::assemble([
            EncodedPoint::new(9, 10, "3"),
            EncodedPoint::new(1, 10, "1"),
            EncodedPoint::new(4, 10, "2"),
        ]);
        let xs: Vec<_> = assembly.points.iter().map(DecodedPoint::x).collect();
        assert_eq!(xs, vec![1, 4, 9]);
    }
}
