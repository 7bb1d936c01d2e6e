//! Shared scan session for UniFFI hosts
//!
//! Foreign objects are handed out as `Arc` and called through `&self`, so the
//! session sits behind a mutex.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::ScannerConfig;
use crate::error::ConfigError;
use crate::scanner::{BarcodeHandler, ScanEvent, ScanOutcome, ScanSession, ScanState};

/// The scanner screen's entry point into the core. Wraps a [`ScanSession`].
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
#[derive(Debug, Default)]
pub struct ScanController {
    session: Mutex<ScanSession>,
}

/// Private helpers (not exported via UniFFI).
impl ScanController {
    fn session(&self) -> MutexGuard<'_, ScanSession> {
        // A panic mid-update leaves plain data behind; keep using it
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl ScanController {
    /// Session with default settings: EAN-13 only, decimal gate, archive.org lookup.
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Session built from checked configuration.
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn from_config(config: ScannerConfig) -> Result<Arc<Self>, ConfigError> {
        let session = ScanSession::from_config(&config)?;
        Ok(Arc::new(Self {
            session: Mutex::new(session),
        }))
    }

    pub fn on_barcode_detected(&self, event: ScanEvent) -> ScanOutcome {
        self.session().on_barcode_detected(event)
    }

    pub fn on_no_barcode(&self) {
        self.session().on_no_barcode()
    }

    /// Lookup button press; see [`ScanSession::take_lookup`].
    pub fn take_lookup(&self) -> Option<String> {
        self.session().take_lookup()
    }

    /// Snapshot of the screen state.
    pub fn state(&self) -> ScanState {
        self.session().state().clone()
    }
}
