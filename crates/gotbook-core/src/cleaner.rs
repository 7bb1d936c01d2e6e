//! Raw scan cleaning

use unicode_normalization::UnicodeNormalization;

/// Length of a legacy Standard Book Number, the 9-digit predecessor of ISBN-10
pub const SBN_LENGTH: usize = 9;

/// Clean a raw scanned string into a code ready for validation.
///
/// Uppercases, then strips every "ISBN" token, space and dash. A 9-digit
/// SBN is promoted to ISBN-10 by prepending '0'; no other length is touched.
/// Never fails: garbage in gives a (non-ISBN) string out.
///
/// Length is counted after NFC composition, so a base letter plus combining
/// mark counts once. The returned string itself is not normalized.
///
/// ```
/// use gotbook_core::clean_isbn;
/// assert_eq!(clean_isbn("isbn 0-306-40615-2"), "0306406152");
/// assert_eq!(clean_isbn("123456789"), "0123456789");
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn clean_isbn(raw: &str) -> String {
    let cleaned = raw
        .to_uppercase()
        .replace("ISBN", "")
        .replace(' ', "")
        .replace('-', "");

    if cleaned.nfc().count() == SBN_LENGTH {
        format!("0{}", cleaned)
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prefix_and_separators() {
        assert_eq!(clean_isbn("ISBN 978-0-13-468599-1"), "9780134685991");
        assert_eq!(clean_isbn("9780134685991"), "9780134685991");
    }

    #[test]
    fn test_lowercase_prefix() {
        assert_eq!(clean_isbn("isbn: 0306406152"), ":0306406152");
        assert_eq!(clean_isbn("Isbn0306406152"), "0306406152");
    }

    #[test]
    fn test_uppercases_check_character() {
        assert_eq!(clean_isbn("080442957x"), "080442957X");
    }

    #[test]
    fn test_promotes_sbn() {
        assert_eq!(clean_isbn("123456789"), "0123456789");
        assert_eq!(clean_isbn("12-345 6789"), "0123456789");
    }

    #[test]
    fn test_other_lengths_untouched() {
        assert_eq!(clean_isbn(""), "");
        assert_eq!(clean_isbn("12345678"), "12345678");
        assert_eq!(clean_isbn("12345"), "12345");
    }

    #[test]
    fn test_single_pass_token_removal() {
        // Removing the inner token leaves a new "ISBN" behind; only one pass is made
        assert_eq!(clean_isbn("ISISBNBN"), "ISBN");
    }

    #[test]
    fn test_combining_mark_counts_with_its_base() {
        // Eight user-visible characters: not an SBN, left unpadded
        let decomposed = "1234567e\u{301}";
        assert_eq!(clean_isbn(decomposed), "1234567E\u{301}");

        let nine = "12345678e\u{301}";
        assert_eq!(clean_isbn(nine), "012345678E\u{301}");
    }

    #[test]
    fn test_promoted_code_is_stable() {
        let once = clean_isbn("123456789");
        assert_eq!(clean_isbn(&once), once);
    }
}
