//! Error types for caption parsing and cross-module error handling
//!
//! # Examples
//!
//! ```rust
//! use cea_core::utils::errors::{CoreError, ErrorCategory};
//!
//! let err = CoreError::InvalidFrameRate(-24.0);
//! assert_eq!(err.category(), ErrorCategory::Configuration);
//! assert!(err.suggestion().is_some());
//! ```

mod category;
mod core;

pub use self::core::{CoreError, Result};
pub use category::ErrorCategory;

/// Convert from float parse errors
impl From<::core::num::ParseFloatError> for CoreError {
    fn from(err: ::core::num::ParseFloatError) -> Self {
        Self::InvalidNumeric(format!("Float parse error: {err}"))
    }
}
