//! CLI error types.

use numbers_core::types::DateError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `numbers` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The session anchor could not be derived.
    #[error("Date error: {0}")]
    Date(#[from] DateError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
