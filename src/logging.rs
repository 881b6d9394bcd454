// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels and formatters, writing to stderr so stdout carries summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration built on `tracing-subscriber`

use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing::{debug, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use workout_core::constants::{env_config, service_names};

use crate::config::LogLevel;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's records
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Full human-readable format for development
    Pretty,
    /// Single-line format (default)
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Compact`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Error,
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::WORKOUT_TRACKER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var(env_config::LOG_LEVEL)
            .map_or(LogLevel::Error, |value| LogLevel::from_str_or_default(&value));

        let format = env::var(env_config::LOG_FORMAT)
            .map_or(LogFormat::Compact, |value| LogFormat::from_str_or_default(&value));

        Self {
            level,
            format,
            include_location: env::var(env_config::LOG_INCLUDE_LOCATION).is_ok(),
            ..Self::default()
        }
    }

    /// Build the event filter; `RUST_LOG` takes precedence over the configured level
    fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(format!("workout_tracker={}", self.level)),
            EnvFilter::new,
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_writer(io::stderr)
            .with_span_events(FmtSpan::NONE);

        let installed = match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init(),
            LogFormat::Pretty => registry.with(layer).try_init(),
            LogFormat::Compact => registry.with(layer.compact().with_target(false)).try_init(),
        };
        installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Workout tracker logging initialized"
        );
    }

    /// Raise the level to `debug` (the `--verbose` flag)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        if self.level.to_tracing_level() < Level::DEBUG {
            self.level = LogLevel::Debug;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_fallback() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Compact);
    }

    #[test]
    fn test_verbose_raises_quiet_levels_only() {
        let config = LoggingConfig::default().verbose();
        assert_eq!(config.level, LogLevel::Debug);

        let config = LoggingConfig {
            level: LogLevel::Trace,
            ..LoggingConfig::default()
        }
        .verbose();
        assert_eq!(config.level, LogLevel::Trace);
    }
}
