//! Error categorization for caption core errors
//!
//! Groups errors for filtering and user interface organization, and offers
//! short suggestions for the common cases.

use super::CoreError;
use std::fmt;

/// Error category for filtering and user interface organization
///
/// # Examples
///
/// ```rust
/// use cea_core::utils::errors::{CoreError, ErrorCategory};
///
/// let error = CoreError::InvalidFrameRate(0.0);
/// assert_eq!(error.category(), ErrorCategory::Configuration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Problems with specific value formats like times or numbers
    Format,

    /// Caller-supplied configuration such as the frame rate
    Configuration,

    /// Companion metadata files
    Metadata,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "format"),
            Self::Configuration => write!(f, "configuration"),
            Self::Metadata => write!(f, "metadata"),
        }
    }
}

impl CoreError {
    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTime(_) | Self::InvalidNumeric(_) => ErrorCategory::Format,
            Self::InvalidFrameRate(_) => ErrorCategory::Configuration,
            Self::Metadata(_) => ErrorCategory::Metadata,
        }
    }

    /// Get suggestion for fixing this error
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidFrameRate(_) => {
                Some("Use a positive frame rate such as 24, 25, 29.97 or 59.94")
            }
            Self::InvalidTime(_) => Some("Use HH:MM:SS:FF or HH:MM:SS;FF timecodes"),
            Self::Metadata(_) => Some("Check the decoder's companion output files"),
            Self::InvalidNumeric(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(
            CoreError::InvalidTime("x".into()).category(),
            ErrorCategory::Format
        );
        assert_eq!(
            CoreError::metadata("x").category(),
            ErrorCategory::Metadata
        );
        assert_eq!(
            CoreError::InvalidFrameRate(0.0).category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn category_display() {
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }

    #[test]
    fn suggestions() {
        assert!(CoreError::InvalidFrameRate(0.0).suggestion().is_some());
        assert!(CoreError::InvalidNumeric("x".into()).suggestion().is_none());
    }
}
