//! Core time and error types.
//!
//! This module provides:
//! - `time`: The promotional `Anchor`, elapsed-second arithmetic and
//!   publish timestamp parsing
//! - `error`: Structured error types for date and formatting operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Anchor`], [`elapsed_seconds`], [`parse_publish_instant`], [`WINDOW_SECONDS`] from `time`
//! - [`DateError`], [`FormatError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, FormatError};
pub use time::{elapsed_seconds, parse_publish_instant, Anchor, WINDOW_SECONDS};
