// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! ISBN scanning core for GotBook
//!
//! Takes the string a barcode reader decoded from a book cover and decides
//! whether it is an ISBN:
//! - Cleaning of raw scans (case, "ISBN" token, spaces, dashes, 9-digit SBNs)
//! - ISBN-10 checksum and ISBN-13 prefix validation
//! - Lookup URL building (Internet Archive "want" page by default)
//! - A platform-free scan session that hosts feed per-frame detections into
//!
//! ```
//! use gotbook_core::{clean_isbn, is_valid_isbn};
//!
//! let code = clean_isbn("ISBN 978-0-13-468599-1");
//! assert_eq!(code, "9780134685991");
//! assert!(is_valid_isbn(&code));
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod ffi;
pub mod formatter;
pub mod lookup;
pub mod scanner;
pub mod validators;

pub use cleaner::*;
pub use config::*;
pub use error::*;
pub use ffi::*;
pub use formatter::*;
pub use lookup::*;
pub use scanner::*;
pub use validators::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
