//! Scan session state machine
//!
//! The camera layer reports one detection per video frame. A [`ScanSession`]
//! receives those detections through [`BarcodeHandler`], keeps the ISBN the
//! user can act on, and produces the lookup URL when the lookup button is
//! pressed. Nothing here touches a camera or a browser; hosts do that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cleaner::clean_isbn;
use crate::config::ScannerConfig;
use crate::error::{ConfigError, InvalidIsbn};
use crate::formatter::format_isbn;
use crate::lookup::LookupTemplate;
use crate::validators::{IsbnEdition, Validator};

/// Button title shown when the scanned barcode is not an ISBN
pub const NOT_AN_ISBN_TITLE: &str = "Not an ISBN";

/// Barcode symbology reported by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Symbology {
    /// EAN-13, the symbology printed on book covers
    Ean13,
    Qr,
    Other,
}

impl Symbology {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbology::Ean13 => "ean13",
            Symbology::Qr => "qr",
            Symbology::Other => "other",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbology {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "").as_str() {
            "ean13" => Ok(Symbology::Ean13),
            "qr" => Ok(Symbology::Qr),
            "other" => Ok(Symbology::Other),
            other => Err(ConfigError::invalid(format!("unknown symbology: {}", other))),
        }
    }
}

/// One barcode detection from the reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ScanEvent {
    pub symbology: Symbology,
    /// Decoded payload; readers sometimes locate a code without decoding it
    pub payload: Option<String>,
}

impl ScanEvent {
    pub fn ean13(payload: impl Into<String>) -> Self {
        Self {
            symbology: Symbology::Ean13,
            payload: Some(payload.into()),
        }
    }
}

/// What a detection did to the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ScanOutcome {
    /// Not an accepted symbology, or nothing decoded
    Ignored,
    /// A valid ISBN is now current
    Isbn { isbn: String, edition: IsbnEdition },
    /// Decoded, but not an ISBN; any current ISBN was cleared
    NotIsbn { cleaned: String, reason: InvalidIsbn },
}

/// Receiver for per-frame barcode detections
pub trait BarcodeHandler {
    /// A barcode was located in the frame
    fn on_barcode_detected(&mut self, event: ScanEvent) -> ScanOutcome;

    /// The frame contained no barcode
    fn on_no_barcode(&mut self);
}

/// Screen state driven by detections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ScanState {
    /// ISBN the lookup button acts on
    pub current_isbn: Option<String>,
    pub button_title: String,
    /// Whether the detection frame is drawn around a barcode
    pub frame_visible: bool,
}

/// Scan session: validator, lookup template, and the state they drive
#[derive(Debug, Clone)]
pub struct ScanSession {
    state: ScanState,
    validator: Validator,
    lookup: LookupTemplate,
    accepted: Vec<Symbology>,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self {
            state: ScanState::default(),
            validator: Validator::default(),
            lookup: LookupTemplate::default(),
            accepted: vec![Symbology::Ean13],
        }
    }
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from checked configuration
    pub fn from_config(config: &ScannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ScanState::default(),
            validator: config.validator(),
            lookup: config.lookup_template()?,
            accepted: config.accepted_symbologies.clone(),
        })
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn accepts(&self, symbology: Symbology) -> bool {
        self.accepted.contains(&symbology)
    }

    /// Lookup button press.
    ///
    /// Returns the lookup URL for the current ISBN and resets the button,
    /// or `None` when no ISBN is current.
    pub fn take_lookup(&mut self) -> Option<String> {
        let isbn = self.state.current_isbn.take()?;
        self.state.button_title.clear();
        let url = self.lookup.url_for(&isbn);
        debug!(%isbn, %url, "lookup requested");
        Some(url)
    }
}

impl BarcodeHandler for ScanSession {
    fn on_barcode_detected(&mut self, event: ScanEvent) -> ScanOutcome {
        if !self.accepts(event.symbology) {
            debug!(symbology = %event.symbology, "ignoring barcode");
            return ScanOutcome::Ignored;
        }

        self.state.frame_visible = true;

        let Some(payload) = event.payload else {
            return ScanOutcome::Ignored;
        };

        let cleaned = clean_isbn(&payload);
        match self.validator.validate(&cleaned) {
            Ok(edition) => {
                debug!(%payload, isbn = %cleaned, %edition, "scanned ISBN");
                self.state.button_title = format_isbn(&cleaned);
                self.state.current_isbn = Some(cleaned.clone());
                ScanOutcome::Isbn {
                    isbn: cleaned,
                    edition,
                }
            }
            Err(reason) => {
                debug!(%payload, %cleaned, %reason, "scanned barcode is not an ISBN");
                self.state.button_title = NOT_AN_ISBN_TITLE.to_string();
                self.state.current_isbn = None;
                ScanOutcome::NotIsbn { cleaned, reason }
            }
        }
    }

    fn on_no_barcode(&mut self) {
        self.state.frame_visible = false;
    }
}
