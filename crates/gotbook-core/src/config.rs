//! Scanner configuration
//!
//! Loaded from TOML (or JSON, for hosts that hand settings over as a blob):
//!
//! ```toml
//! digit_gate = "decimal"
//! accepted_symbologies = ["ean13"]
//! lookup_template = "https://archive.org/want/?id={isbn}&mode=donation_book"
//! ```
//!
//! Every field is optional; missing fields take the defaults, which match
//! the behavior of the original scanner screen.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::lookup::{LookupTemplate, DEFAULT_LOOKUP_TEMPLATE};
use crate::scanner::Symbology;
use crate::validators::{DigitGate, Validator};

/// Config file name under the per-user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ScannerConfig {
    /// Character gate applied before checksum/prefix checks
    pub digit_gate: DigitGate,
    /// Symbologies whose detections are processed
    pub accepted_symbologies: Vec<Symbology>,
    /// Lookup URL template with an `{isbn}` placeholder
    pub lookup_template: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            digit_gate: DigitGate::default(),
            accepted_symbologies: vec![Symbology::Ean13],
            lookup_template: DEFAULT_LOOKUP_TEMPLATE.to_string(),
        }
    }
}

impl ScannerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        debug!(path = %path.display(), gate = %config.digit_gate, "loaded scanner config");
        Ok(config)
    }

    /// Load the per-user config file if there is one, defaults otherwise
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accepted_symbologies.is_empty() {
            return Err(ConfigError::invalid(
                "accepted_symbologies must not be empty",
            ));
        }

        LookupTemplate::new(self.lookup_template.as_str())?;

        Ok(())
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.digit_gate)
    }

    pub fn lookup_template(&self) -> Result<LookupTemplate, ConfigError> {
        Ok(LookupTemplate::new(self.lookup_template.as_str())?)
    }
}

/// `<config dir>/gotbook/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gotbook").join(CONFIG_FILE_NAME))
}
