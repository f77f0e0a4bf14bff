//! Logging System
//!
//! Diagnostics go through `tracing` to stderr so they never mix with the game
//! display on stdout. Logging is off unless asked for.

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a filter directive; wins over configuration.
pub const LOG_ENV: &str = "MICROINJECT_LOG";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive: trace, debug, info, warn, error, off, or `target=level` lists
    pub level: String,
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
            color: true,
        }
    }
}

/// Pick the filter: environment directive first, then the configured level.
pub fn build_env_filter(env_value: Option<&str>, config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let directive = match env_value {
        Some(value) if !value.trim().is_empty() => value,
        _ => config.level.as_str(),
    };
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        filter: directive.to_string(),
        reason: e.to_string(),
    })
}

pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_env_filter(env_value.as_deref(), config)?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.color)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
