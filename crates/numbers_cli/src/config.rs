//! Shell configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments.

use numbers_core::format::{Locale, NumberFormat};
use numbers_core::types::Anchor;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable pinning the anchor instant.
pub const ENV_ANCHOR: &str = "NUMBERS_ANCHOR";
/// Environment variable selecting the formatting locale.
pub const ENV_LOCALE: &str = "NUMBERS_LOCALE";
/// Environment variable selecting the log level.
pub const ENV_LOG_LEVEL: &str = "NUMBERS_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid locale: {0}. Must be one of: en-US, en-GB, de-DE, fr-FR, de-CH, plain")]
    InvalidLocale(String),

    #[error("Invalid anchor: {0}. Expected an RFC 3339 timestamp or YYYY-MM-DD")]
    InvalidAnchor(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Shell configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NumbersConfig {
    /// Pinned anchor instant; April 1 of the current UTC year when unset
    pub anchor: Option<String>,
    /// Formatting locale tag
    pub locale: String,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Text printed after every Number
    pub suffix: String,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for NumbersConfig {
    fn default() -> Self {
        Self {
            anchor: None,
            locale: Locale::EnUs.tag().to_string(),
            log_level: LogLevel::Info,
            suffix: "Numbers™".to_string(),
        }
    }
}

impl NumbersConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(anchor) = std::env::var(ENV_ANCHOR) {
            config.anchor = Some(anchor);
        }

        if let Ok(locale) = std::env::var(ENV_LOCALE) {
            config.locale = locale;
        }

        if let Ok(log_level) = std::env::var(ENV_LOG_LEVEL) {
            config.log_level = LogLevel::from_str(&log_level)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: NumbersConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve_anchor()?;
        self.number_format()?;
        Ok(())
    }

    /// Parse the pinned anchor, if one is configured
    pub fn resolve_anchor(&self) -> Result<Option<Anchor>, ConfigError> {
        self.anchor
            .as_deref()
            .map(|raw| {
                Anchor::from_str(raw).map_err(|_| ConfigError::InvalidAnchor(raw.to_string()))
            })
            .transpose()
    }

    /// Build the number formatter for the configured locale
    pub fn number_format(&self) -> Result<NumberFormat, ConfigError> {
        Locale::from_str(&self.locale)
            .map(NumberFormat::new)
            .map_err(|_| ConfigError::InvalidLocale(self.locale.clone()))
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(anchor) = &cli.anchor {
            self.anchor = Some(anchor.clone());
        }
        if let Some(locale) = &cli.locale {
            self.locale = locale.clone();
        }
        if let Some(log_level) = &cli.log_level {
            if let Ok(level) = LogLevel::from_str(log_level) {
                self.log_level = level;
            }
        }
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Anchor override
    pub anchor: Option<String>,
    /// Locale override
    pub locale: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<NumbersConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        NumbersConfig::from_file(config_path)?
    } else {
        NumbersConfig::default()
    };

    // Only override values the environment actually sets
    let env_config = NumbersConfig::from_env()?;
    if std::env::var(ENV_ANCHOR).is_ok() {
        config.anchor = env_config.anchor;
    }
    if std::env::var(ENV_LOCALE).is_ok() {
        config.locale = env_config.locale;
    }
    if std::env::var(ENV_LOG_LEVEL).is_ok() {
        config.log_level = env_config.log_level;
    }

    config.merge_with_cli(cli);

    config.validate()?;

    Ok(config)
}
