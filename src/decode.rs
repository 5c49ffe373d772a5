//! Arbitrary-base digit string decoding.
//!
//! Shares carry their ordinates as digit strings in a declared positional
//! base, e.g. `("111", 2)` for 7 or `("213", 4)` for 39. [`decode`] turns
//! one such pair into an exact [`Integer`].
//!
//! The digit alphabet is the standard numeral set: `0-9` for values 0..10
//! and `a-z` / `A-Z` (case-insensitive) for values 10..36. Any other
//! character, any digit value at or above the declared base, and the empty
//! string are rejected as [`Error::InvalidDigit`]. No whitespace trimming
//! is performed.

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::value::Integer;

/// Decodes a digit string in the given base into an exact integer.
///
/// Digits are processed most-significant-first, accumulating
/// `acc = acc * base + digit` over an arbitrary-precision integer, so
/// overflow is structurally impossible no matter how long the string is.
///
/// # Examples
/// ```
/// # use polyrecover::decode;
/// # use polyrecover::Integer;
/// assert_eq!(decode("111", 2).unwrap(), Integer::new(7));
/// assert_eq!(decode("213", 4).unwrap(), Integer::new(39));
/// assert_eq!(decode("ff", 16).unwrap(), Integer::new(255));
/// ```
///
/// # Errors
/// - [`Error::InvalidBase`] if `base < 2`.
/// - [`Error::InvalidDigit`] if `digits` is empty, contains a character
///   outside the numeral alphabet, or contains a digit whose value is not
///   below `base`.
pub fn decode(digits: &str, base: u32) -> Result<Integer> {
    if base < 2 {
        return Err(Error::InvalidBase {
            base: base.to_string(),
        });
    }
    if digits.is_empty() {
        return Err(Error::InvalidDigit {
            digits: String::new(),
            base,
        });
    }

    let invalid = || Error::InvalidDigit {
        digits: digits.to_string(),
        base,
    };

    let mut acc = Integer::zero();
    let radix = Integer::from(base);
    for c in digits.chars() {
        let value = c.to_digit(36).ok_or_else(invalid)?;
        if value >= base {
            return Err(invalid());
        }
        acc = acc * radix.clone() + Integer::from(value);
    }
    Ok(acc)
}
