//! Price extraction from rendered storefront text.

use std::sync::OnceLock;

use regex::Regex;

use crate::result::{VitrinaError, VitrinaResult};

static AMOUNT: OnceLock<Regex> = OnceLock::new();

fn amount_pattern() -> &'static Regex {
    AMOUNT.get_or_init(|| {
        Regex::new(r"^\$?(\d+(?:\.\d+)?|\.\d+)$").expect("valid amount pattern")
    })
}

/// Parse a rendered price cell, accepting at most one leading `$`.
///
/// `"$15.99"` and `"15.99"` both parse to `15.99`; any numeric remainder
/// after the optional `$` is accepted, so `"$15.9"` and `"15"` parse
/// too. A non-numeric remainder or a doubled currency symbol is a
/// [`VitrinaError::PriceParse`]: a malformed amount cell is a defect in
/// the application under test.
pub fn parse_price(text: &str) -> VitrinaResult<f64> {
    let trimmed = text.trim();
    let captures = amount_pattern()
        .captures(trimmed)
        .ok_or_else(|| VitrinaError::PriceParse {
            text: text.to_string(),
        })?;
    captures[1]
        .parse::<f64>()
        .map_err(|_| VitrinaError::PriceParse {
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_single_currency_prefix() {
        assert!((parse_price("$15.99").unwrap() - 15.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_idempotent_on_clean_numeric_text() {
        assert!((parse_price("15.99").unwrap() - 15.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trims_whitespace() {
        assert!((parse_price(" $7.99 ").unwrap() - 7.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strips_only_one_symbol() {
        assert!(parse_price("$$15.99").is_err());
    }

    #[test]
    fn test_accepts_any_numeric_remainder() {
        assert!((parse_price("$15.9").unwrap() - 15.9).abs() < f64::EPSILON);
        assert!((parse_price("$15").unwrap() - 15.0).abs() < f64::EPSILON);
        assert!((parse_price(".5").unwrap() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_numeric_is_parse_error() {
        let err = parse_price("free!").unwrap_err();
        assert!(matches!(
            err,
            crate::result::VitrinaError::PriceParse { .. }
        ));
    }

    #[test]
    fn test_empty_is_parse_error() {
        assert!(parse_price("").is_err());
        assert!(parse_price("$").is_err());
    }

    proptest! {
        /// Prefixing a clean amount with one `$` never changes the value
        #[test]
        fn prop_prefix_roundtrip(cents in 0u32..1_000_000) {
            let clean = format!("{}.{:02}", cents / 100, cents % 100);
            let prefixed = format!("${clean}");
            prop_assert_eq!(
                parse_price(&clean).unwrap().to_bits(),
                parse_price(&prefixed).unwrap().to_bits()
            );
        }
    }
}
