//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from anchor construction and timestamp parsing
//! - `FormatError`: Errors from number format configuration

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for anchor construction and
/// timestamp parsing with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., a year chrono cannot represent)
/// - `ParseError`: Failed to parse a timestamp string
///
/// # Examples
/// ```
/// use numbers_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse timestamp string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Number formatting errors.
///
/// # Examples
/// ```
/// use numbers_core::types::FormatError;
///
/// let err = FormatError::UnknownLocale("xx-XX".to_string());
/// assert!(format!("{}", err).contains("xx-XX"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Locale tag is not one of the supported conventions.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("garbage".to_string());
        assert_eq!(format!("{}", err), "Date parse error: garbage");
    }

    #[test]
    fn test_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2023,
            month: 4,
            day: 31,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2023-4-31");
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::UnknownLocale("tlh".to_string());
        assert_eq!(format!("{}", err), "Unknown locale: tlh");
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&DateError::ParseError(String::new()));
        assert_error(&FormatError::UnknownLocale(String::new()));
    }
}
