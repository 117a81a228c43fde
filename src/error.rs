//! Error types shared by the contact-action modules.
//!
//! None of these are fatal to a session: clipboard errors become a failure
//! toast, preference errors fall back to "no preference", and config errors
//! only stop the CLI before any action runs.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("reduced-motion query is not supported on this platform")]
    Unsupported,
    #[error("unrecognised reduced-motion value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
