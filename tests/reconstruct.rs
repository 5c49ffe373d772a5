//! End-to-end reconstruction tests: raw record in, polynomial out.

use polyrecover::{reconstruct, Error, Integer, ShareEntry, ShareKeys, ShareRecord};

fn record(n: u32, k: u32, entries: &[(&str, &str, &str)]) -> ShareRecord {
    ShareRecord::new(
        ShareKeys { n, k },
        entries
            .iter()
            .map(|&(key, base, value)| (key.to_string(), ShareEntry::new(base, value)))
            .collect(),
    )
}

#[test]
fn mixed_base_shares_reconstruct_the_quadratic() {
    // Decoded: (1,1), (2,7), (3,12), (6,39); k=3 fits a quadratic through
    // the first three, y = -0.5 x^2 + 7.5 x - 6
    let record = record(
        4,
        3,
        &[
            ("1", "10", "1"),
            ("2", "2", "111"),
            ("3", "10", "12"),
            ("6", "4", "213"),
        ],
    );

    let result = reconstruct(&record).unwrap();
    assert!(result.skipped.is_empty());
    assert_eq!(result.polynomial.degree(), 2);

    let coefs = result.polynomial.coefficients_f64();
    assert!((coefs[0] - -0.5).abs() < 1e-6);
    assert!((coefs[1] - 7.5).abs() < 1e-6);
    assert!((coefs[2] - -6.0).abs() < 1e-6);
    assert_eq!(result.polynomial.constant_as_integer(), Integer::new(-6));
}

#[test]
fn integer_secret_survives_the_round_trip() {
    // y = 2x^2 + 3x + 1977, sampled at x = 1, 2, 3 and encoded in
    // different bases: 1982 = 11110111110_2 = 7BE_16, 1991 in octal,
    // 2004 in base 10
    let record = record(
        3,
        3,
        &[
            ("1", "16", "7be"),
            ("2", "8", "3707"),
            ("3", "10", "2004"),
        ],
    );

    let result = reconstruct(&record).unwrap();
    assert_eq!(
        result.polynomial.rounded_coefficients(),
        vec![Integer::new(2), Integer::new(3), Integer::new(1977)]
    );
    assert_eq!(result.polynomial.constant_as_integer(), Integer::new(1977));
}

#[test]
fn undecodable_shares_are_skipped_until_the_fit_starves() {
    // k=3 but only two shares decode
    let record = record(
        4,
        3,
        &[
            ("1", "10", "4"),
            ("2", "10", "7"),
            ("3", "2", "129"),
            ("4", "0", "11"),
        ],
    );
    assert_eq!(
        reconstruct(&record),
        Err(Error::InsufficientPoints {
            available: 2,
            required: 3
        })
    );
}

#[test]
fn evaluation_agrees_with_the_source_points() {
    let record = record(
        3,
        3,
        &[("1", "10", "47"), ("2", "10", "58"), ("3", "10", "75")],
    );
    let result = reconstruct(&record).unwrap();
    // y = 3x^2 + 2x + 42
    for (x, y) in [(1, 47), (2, 58), (3, 75), (10, 362)] {
        assert_eq!(
            result.polynomial.evaluate(&Integer::new(x)).round(),
            Integer::new(y)
        );
    }
}

#[cfg(feature = "serde")]
mod json {
    use super::*;

    #[test]
    fn reconstructs_straight_from_json() {
        let json = r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2",  "value": "111" },
            "3": { "base": "10", "value": "12" },
            "6": { "base": "4",  "value": "213" }
        }"#;
        let record: ShareRecord = serde_json::from_str(json).unwrap();
        let result = reconstruct(&record).unwrap();
        // Quadratic through (1,4), (2,7), (3,12) is y = x^2 + 3
        assert_eq!(result.polynomial.constant_as_integer(), Integer::new(3));
    }

    #[test]
    fn large_base16_shares_keep_exact_precision() {
        // y = c (degree 0) where c is a 40-hex-digit value
        let digits = "f".repeat(40);
        let json = format!(
            r#"{{
                "keys": {{ "n": 1, "k": 1 }},
                "1": {{ "base": "16", "value": "{digits}" }}
            }}"#
        );
        let record: ShareRecord = serde_json::from_str(&json).unwrap();
        let result = reconstruct(&record).unwrap();
        let expected = polyrecover::decode(&digits, 16).unwrap();
        assert_eq!(result.polynomial.constant_as_integer(), expected);
    }
}
