//! # Polyrecover
//! ## Exact polynomial reconstruction from base-encoded shares
//!
//! You have `n` sample points of an unknown polynomial of degree `k - 1`,
//! except each ordinate arrives as a digit string in some arbitrary radix:
//! `("111", base 2)`, `("213", base 4)`, and so on. This crate decodes the
//! shares exactly, builds the Vandermonde interpolation system, and solves
//! it with partial-pivoted Gaussian elimination over arbitrary-precision
//! arithmetic, so realistic inputs can't overflow a machine word or lose
//! the constant term to rounding.
//!
//! The constant term is exposed separately because it is usually the point
//! of the exercise: in a threshold-reconstruction scheme it is the secret.
//!
//! The simplest use-case is feeding in a whole share record (with the
//! default `serde` feature, `ShareRecord` deserializes straight from JSON):
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! use polyrecover::{reconstruct, Integer, ShareRecord};
//!
//! let record: ShareRecord = serde_json::from_str(
//!     r#"{
//!         "keys": { "n": 4, "k": 3 },
//!         "1": { "base": "10", "value": "4" },
//!         "2": { "base": "10", "value": "7" },
//!         "3": { "base": "10", "value": "12" },
//!         "6": { "base": "10", "value": "39" }
//!     }"#,
//! )
//! .unwrap();
//!
//! let result = reconstruct(&record).unwrap();
//! assert_eq!(result.polynomial.constant_as_integer(), Integer::new(3));
//! # }
//! ```
//!
//! # Core concepts
//! - [`decode`] turns one `(digits, base)` pair into an exact [`Integer`].
//!   Overflow is structurally impossible, not merely checked.
//! - A [`PointSet`] is the validated collection of decoded `(x, y)` points.
//!   Assembly is lenient: a share that fails to decode is dropped and
//!   reported, never fatal by itself.
//! - A [`FitRequest`] interpolates a point set at a chosen degree. When
//!   more points are available than needed, exactly the first `degree + 1`
//!   by ascending x are used, so results are deterministic and
//!   reproducible.
//! - A [`PolynomialResult`] holds the coefficients highest degree first
//!   and names the constant term.
//!
//! Failure kinds are explicit ([`Error`]): bad radix, bad digit,
//! insufficient points, singular system. The fit either succeeds or fails
//! fast; there is no partial coefficient vector.
//!
//! # Implementation details
//!
//! Matrices and vectors are `nalgebra` types instantiated at an
//! arbitrary-precision scalar backed by `dashu`. Vandermonde powers are
//! computed exactly over integers before anything touches a float, and the
//! floating working precision is sized from the inputs (and can be
//! overridden with [`FitRequest::with_precision`]).
//!
//! Each fit owns all of its state, so independent fits can run on separate
//! threads with zero coordination.
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)] // The worst clippy lint
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar

pub mod error;
pub mod record;
pub mod value;

mod decode;
mod fit;
mod point;
mod polynomial;

pub use decode::decode;
pub use error::{Error, Result};
pub use fit::{reconstruct, solve_system, vandermonde_system, FitRequest, Reconstruction};
pub use point::{Assembly, DecodedPoint, EncodedPoint, PointSet, Skipped};
pub use polynomial::PolynomialResult;
pub use record::{ShareEntry, ShareKeys, ShareRecord};
pub use value::{Integer, Real};

pub use dashu;
pub use nalgebra;
