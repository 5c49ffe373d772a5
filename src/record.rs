//! The structured share record consumed from the ingestion layer.
//!
//! The wire shape mirrors the documents this system is fed:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2",  "value": "111" }
//! }
//! ```
//!
//! Bases and values arrive as strings; share keys are the JSON object keys
//! alongside `"keys"`. With the (default) `serde` feature the types here
//! derive `Deserialize`/`Serialize`, so any conformant format parser (e.g.
//! `serde_json`) produces a [`ShareRecord`] directly; there is no ad hoc
//! text scanning anywhere.
//!
//! Only `k` feeds the reconstruction (`degree = k - 1`). `n` is carried as
//! declared but never validated against the actual share count.

use std::collections::BTreeMap;

use crate::error::Error;
use crate::point::{EncodedPoint, Skipped};

/// The `"keys"` header of a share record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShareKeys {
    /// Declared number of shares in the record. Informational only.
    pub n: u32,
    /// Minimum number of shares needed; the polynomial degree is `k - 1`.
    pub k: u32,
}

/// One share entry: a declared base and a digit string, both as received.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShareEntry {
    /// The declared radix, as text.
    pub base: String,
    /// The encoded ordinate, most significant digit first.
    pub value: String,
}

impl ShareEntry {
    /// Creates a share entry from a base and digit string.
    #[must_use]
    pub fn new(base: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            value: value.into(),
        }
    }
}

/// A complete share record: the `keys` header plus the keyed share entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShareRecord {
    /// The `n`/`k` header.
    pub keys: ShareKeys,
    /// Share entries keyed by abscissa; keys stay as text until conversion.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub shares: BTreeMap<String, ShareEntry>,
}

impl ShareRecord {
    /// Creates a record from a header and keyed entries.
    #[must_use]
    pub fn new(keys: ShareKeys, shares: BTreeMap<String, ShareEntry>) -> Self {
        Self { keys, shares }
    }

    /// The polynomial degree this record calls for, `k - 1`.
    #[must_use]
    pub fn degree(&self) -> usize {
        (self.keys.k as usize).saturating_sub(1)
    }

    /// Converts the entries into [`EncodedPoint`]s.
    ///
    /// Entries whose key does not parse as a non-negative integer, or
    /// whose declared base is not an integer, are dropped and reported;
    /// conversion never fails as a whole. Base values below 2 pass through
    /// here and are rejected during decoding instead.
    #[must_use]
    pub fn encoded_points(&self) -> (Vec<EncodedPoint>, Vec<Skipped>) {
        let mut points = Vec::with_capacity(self.shares.len());
        let mut skipped = Vec::new();
        for (key, entry) in &self.shares {
            let x = match key.parse::<u64>() {
                Ok(x) => x,
                Err(_) => {
                    skipped.push(Skipped {
                        key: key.clone(),
                        error: Error::InvalidKey { key: key.clone() },
                    });
                    continue;
                }
            };
            let base = match entry.base.parse::<u32>() {
                Ok(base) => base,
                Err(_) => {
                    skipped.push(Skipped {
                        key: key.clone(),
                        error: Error::InvalidBase {
                            base: entry.base.clone(),
                        },
                    });
                    continue;
                }
            };
            points.push(EncodedPoint::new(x, base, entry.value.clone()));
        }
        (points, skipped)
    }
}
