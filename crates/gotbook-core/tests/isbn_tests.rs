//! Cleaning and validation integration tests

use gotbook_core::{
    clean_isbn, format_isbn, is_valid_isbn, validate_isbn, DigitGate, InvalidIsbn, IsbnEdition,
    Validator,
};
use proptest::prelude::*;
use rstest::rstest;
use unicode_normalization::UnicodeNormalization;

// === Cleaning ===

#[rstest]
#[case("ISBN 978-0-13-468599-1", "9780134685991")]
#[case("9780134685991", "9780134685991")]
#[case("isbn 0-306-40615-2", "0306406152")]
#[case("0 306 40615 2", "0306406152")]
#[case("123456789", "0123456789")]
#[case("ISBN 1-2345-6789", "0123456789")]
#[case("080442957x", "080442957X")]
#[case("12345", "12345")]
fn test_clean_variants(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(clean_isbn(raw), expected);
}

#[test]
fn test_noise_insensitivity() {
    assert_eq!(
        clean_isbn("ISBN 978-0-13-468599-1"),
        clean_isbn("9780134685991")
    );
}

// === Validation ===

#[rstest]
#[case("9780134685991", IsbnEdition::Isbn13)]
#[case("9790134685991", IsbnEdition::Isbn13)]
#[case("0306406152", IsbnEdition::Isbn10)]
#[case("0134685997", IsbnEdition::Isbn10)]
fn test_valid_codes(#[case] code: &str, #[case] edition: IsbnEdition) {
    assert!(is_valid_isbn(code));
    assert_eq!(validate_isbn(code), Ok(edition));
}

#[rstest]
#[case("1234567890123", InvalidIsbn::BadPrefix)]
#[case("0306406151", InvalidIsbn::BadChecksum)]
#[case("12345", InvalidIsbn::BadLength { length: 5 })]
#[case("12345678901234", InvalidIsbn::BadLength { length: 14 })]
#[case("978013468599A", InvalidIsbn::BadCharacters)]
#[case("", InvalidIsbn::BadCharacters)]
fn test_invalid_codes(#[case] code: &str, #[case] reason: InvalidIsbn) {
    assert!(!is_valid_isbn(code));
    assert_eq!(validate_isbn(code), Err(reason));
}

/// Pins how ISBN-10 codes with an 'X' check character are treated.
///
/// The default gate only admits decimal digits, so these are rejected even
/// though the checksum is correct. The radix-11 gate lets them through.
#[rstest]
#[case("080442957X")]
#[case("043942089X")]
fn test_x_check_character_regression(#[case] code: &str) {
    assert!(!is_valid_isbn(code));
    assert_eq!(validate_isbn(code), Err(InvalidIsbn::BadCharacters));
    assert_eq!(
        Validator::new(DigitGate::Radix11).validate(code),
        Ok(IsbnEdition::Isbn10)
    );
}

#[test]
fn test_radix11_gate_still_checks_sum() {
    let validator = Validator::new(DigitGate::Radix11);
    assert!(!validator.is_valid("080442958X"));
    assert!(validator.is_valid("0306406152"));
    assert!(!validator.is_valid("1234567890123"));
}

#[test]
fn test_clean_then_validate() {
    assert!(is_valid_isbn(&clean_isbn("ISBN 0-306-40615-2")));
    // 9-digit SBN promoted then checksummed
    assert!(is_valid_isbn(&clean_isbn("306406152")));
}

#[test]
fn test_format_isbn() {
    assert_eq!(format_isbn(&clean_isbn("978-0-13-468599-1")), "ISBN 9780134685991");
}

// === Properties ===

fn weighted_isbn10_sum(code: &str) -> u32 {
    code.chars()
        .enumerate()
        .map(|(i, c)| c.to_digit(10).unwrap() * (10 - i as u32))
        .sum()
}

proptest! {
    #[test]
    fn prop_clean_idempotent(raw in "[0-9X \\-]{0,20}") {
        let once = clean_isbn(&raw);
        prop_assert_eq!(clean_isbn(&once), once);
    }

    #[test]
    fn prop_clean_never_returns_nine_chars(raw in "[0-9A-Za-z \\-\u{301}]{0,20}") {
        prop_assert_ne!(clean_isbn(&raw).nfc().count(), 9);
    }

    #[test]
    fn prop_separators_ignored(
        digits in "97[89][0-9]{10}",
        dashes in proptest::collection::vec(any::<bool>(), 13),
    ) {
        let noisy: String = digits
            .chars()
            .zip(dashes)
            .map(|(c, dash)| if dash { format!("{}- ", c) } else { c.to_string() })
            .collect();
        let raw = format!("ISBN {}", noisy);
        prop_assert_eq!(clean_isbn(&raw), digits.clone());
        prop_assert!(is_valid_isbn(&clean_isbn(&raw)));
    }

    #[test]
    fn prop_isbn10_matches_weighted_sum(code in "[0-9]{10}") {
        prop_assert_eq!(is_valid_isbn(&code), weighted_isbn10_sum(&code) % 11 == 0);
    }

    #[test]
    fn prop_isbn13_needs_bookland_prefix(code in "[0-9]{13}") {
        let expected = code.starts_with("978") || code.starts_with("979");
        prop_assert_eq!(is_valid_isbn(&code), expected);
    }
}
