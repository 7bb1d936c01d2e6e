//! Display formatting for cleaned ISBNs

/// Format a clean ISBN for display: `ISBN 9780134685991`.
///
/// Hyphenation is not attempted; group boundaries depend on registrant
/// range tables.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_isbn(isbn: &str) -> String {
    format!("ISBN {}", isbn)
}
