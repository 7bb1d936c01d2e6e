//! Error types for validation, lookup, and configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a cleaned code is not an ISBN
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum InvalidIsbn {
    #[error("contains characters outside the digit set")]
    BadCharacters,

    #[error("ISBN-10 check digit does not match")]
    BadChecksum,

    #[error("13-digit code does not start with 978 or 979")]
    BadPrefix,

    #[error("unexpected length {length}")]
    BadLength { length: u64 },
}

/// Errors building a lookup URL template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum LookupError {
    #[error("lookup template has no {{isbn}} placeholder")]
    MissingPlaceholder,

    #[error("lookup template is not a valid URL: {message}")]
    InvalidUrl { message: String },

    #[error("unsupported lookup URL scheme: {scheme}")]
    UnsupportedScheme { scheme: String },
}

/// Errors loading or validating scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum ConfigError {
    #[error("IO error: {message}")]
    Io { message: String },

    #[error("TOML parse error: {message}")]
    Parse { message: String },

    #[error("TOML serialize error: {message}")]
    Serialize { message: String },

    #[error("JSON error: {message}")]
    Json { message: String },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json {
            message: err.to_string(),
        }
    }
}

impl From<LookupError> for ConfigError {
    fn from(err: LookupError) -> Self {
        ConfigError::invalid(err.to_string())
    }
}
