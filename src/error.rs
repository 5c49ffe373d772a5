//! Error types for polynomial reconstruction
//!
//! This module defines the failure kinds encountered while decoding
//! base-encoded shares or solving the interpolation system, along with a
//! convenient `Result` alias.

/// Errors that can occur during decoding or polynomial reconstruction.
///
/// Decode-level errors (`InvalidBase`, `InvalidDigit`, `InvalidKey`) are
/// local to a single share: assembly skips the offending share, records it,
/// and continues. Fit-level errors (`InsufficientPoints`, `SingularSystem`)
/// abort the whole reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The declared base is not a usable radix.
    ///
    /// Positional numeral systems need at least two digit values; a base
    /// that is below 2, or that is not an integer at all, cannot encode
    /// anything.
    #[error("declared base {base:?} is not a usable radix (must be an integer >= 2)")]
    InvalidBase {
        /// The declared base, as it appeared in the input
        base: String,
    },

    /// A digit string is not a valid numeral in its declared base.
    ///
    /// Raised when a character is outside the `0-9a-zA-Z` digit alphabet,
    /// when its value is greater than or equal to the base, or when the
    /// string is empty.
    #[error("{digits:?} is not a valid base-{base} numeral")]
    InvalidDigit {
        /// The offending digit string
        digits: String,
        /// The base it was declared in
        base: u32,
    },

    /// A share key is not a non-negative integer.
    ///
    /// Share keys double as the abscissas of the sample points, so a key
    /// that does not parse as an integer has no place on the x axis.
    #[error("share key {key:?} is not a non-negative integer")]
    InvalidKey {
        /// The offending key, as it appeared in the input
        key: String,
    },

    /// Too few usable points to determine the polynomial.
    ///
    /// Interpolating a degree-`d` polynomial needs exactly `d + 1` points;
    /// shares lost to decode failures count against this.
    #[error("{available} usable point(s) available but {required} are required")]
    InsufficientPoints {
        /// Number of successfully decoded points
        available: usize,
        /// Number of points required (`degree + 1`)
        required: usize,
    },

    /// Elimination found a pivot column with no usable non-zero entry.
    ///
    /// For a Vandermonde system this means the abscissas were not distinct.
    #[error("pivot column {column} has no non-zero entry; the system is singular")]
    SingularSystem {
        /// Zero-based pivot column at which elimination stalled
        column: usize,
    },
}

/// Result type for polynomial reconstruction
pub type Result<T> = std::result::Result<T, Error>;
