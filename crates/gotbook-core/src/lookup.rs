//! Lookup URL building
//!
//! A scanned ISBN is looked up by substituting it into a URL template. The
//! default template points at the Internet Archive "want" page, which tells
//! the user whether the book is wanted as a donation.

use tracing::debug;
use url::Url;

use crate::error::LookupError;

/// Placeholder replaced by the ISBN in a lookup template
pub const ISBN_PLACEHOLDER: &str = "{isbn}";

/// Internet Archive donation lookup
pub const DEFAULT_LOOKUP_TEMPLATE: &str = "https://archive.org/want/?id={isbn}&mode=donation_book";

/// A checked lookup URL template containing an `{isbn}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTemplate {
    template: String,
}

impl LookupTemplate {
    /// Check and wrap a template. It must contain `{isbn}` and, with a
    /// sample ISBN substituted, parse as an absolute http(s) URL.
    pub fn new(template: impl Into<String>) -> Result<Self, LookupError> {
        let template = template.into();
        if !template.contains(ISBN_PLACEHOLDER) {
            return Err(LookupError::MissingPlaceholder);
        }

        let sample = template.replace(ISBN_PLACEHOLDER, "0306406152");
        let url = Url::parse(&sample).map_err(|e| LookupError::InvalidUrl {
            message: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self { template }),
            scheme => Err(LookupError::UnsupportedScheme {
                scheme: scheme.to_string(),
            }),
        }
    }

    /// Build the lookup URL for a cleaned ISBN
    pub fn url_for(&self, isbn: &str) -> String {
        let url = self
            .template
            .replace(ISBN_PLACEHOLDER, &urlencoding::encode(isbn));
        debug!(isbn, url = %url, "built lookup URL");
        url
    }
}

impl Default for LookupTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_LOOKUP_TEMPLATE.to_string(),
        }
    }
}

/// Lookup URL for an ISBN using the default Internet Archive template
///
/// ```
/// use gotbook_core::lookup_url;
/// assert_eq!(
///     lookup_url("9780134685991"),
///     "https://archive.org/want/?id=9780134685991&mode=donation_book"
/// );
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn lookup_url(isbn: &str) -> String {
    LookupTemplate::default().url_for(isbn)
}

/// Lookup URL for an ISBN using a custom template
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn lookup_url_with_template(template: &str, isbn: &str) -> Result<String, LookupError> {
    Ok(LookupTemplate::new(template)?.url_for(isbn))
}
