//! Core error type for CEA caption parsing
//!
//! Decoding itself is defensive and never fails on malformed caption text;
//! `CoreError` covers caller precondition violations (such as an invalid
//! frame rate) and companion metadata that cannot be interpreted.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Absence of data is `None`, not an error
//! - Errors carry enough context to be shown to a user unchanged

use std::fmt;

use thiserror::Error;

/// Main error type for caption core operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Frame rate is zero, negative or not a finite number
    #[error("Invalid frame rate: {0} (must be a positive, finite number)")]
    InvalidFrameRate(f64),

    /// Time format parsing errors
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// A number in companion metadata that does not parse
    #[error("Invalid numeric value: {0}")]
    InvalidNumeric(String),

    /// Companion metadata (`.ccd`, `.dbg`) that cannot be interpreted
    #[error("Metadata error: {0}")]
    Metadata(String),
}

impl CoreError {
    /// Create metadata error from message
    pub fn metadata<T: fmt::Display>(message: T) -> Self {
        Self::Metadata(message.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
