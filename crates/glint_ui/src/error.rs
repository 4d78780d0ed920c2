//! # UI Error Types
//!
//! Widgets never fail once built. These errors only come out of
//! construction-time paths: config loading and strict validation.

use thiserror::Error;

/// Errors that can occur while configuring the UI.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    /// A numeric slider scale must satisfy `min < max` with finite bounds.
    #[error("invalid slider scale: min {min} must be below max {max}")]
    InvalidScale {
        /// Requested minimum.
        min: f64,
        /// Requested maximum.
        max: f64,
    },

    /// The config file could not be read.
    #[error("failed to read config {path}: {reason}")]
    ConfigRead {
        /// Path that was opened.
        path: String,
        /// Underlying I/O error, rendered.
        reason: String,
    },

    /// The config text is not valid TOML or does not match the schema.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scene button names an action the host never registered.
    #[error("unknown button action: {0}")]
    UnknownAction(String),
}

impl From<toml::de::Error> for UiError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for UI configuration.
pub type UiResult<T> = Result<T, UiError>;
