// ABOUTME: Environment configuration for the workout tracker runtime
// ABOUTME: Parses output format and log level settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration; there are no configuration files

use std::env;
use std::fmt;
use tracing::Level;
use workout_core::constants::env_config;
use workout_core::errors::AppResult;

use crate::formatters::OutputFormat;
use crate::logging::LoggingConfig;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only
    #[default]
    Error,
    /// Warnings and errors
    Warn,
    /// Informational records
    Info,
    /// Debug records
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Error`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "warn" => Self::Warn,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Runtime configuration of the workout tracker
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Format used to print workout summaries
    pub output_format: OutputFormat,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ErrorCode::ConfigInvalid` if
    /// `WORKOUT_OUTPUT_FORMAT` is set to an unknown format
    pub fn from_env() -> AppResult<Self> {
        let output_format = match env::var(env_config::OUTPUT_FORMAT) {
            Ok(value) => value.parse()?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Self {
            output_format,
            logging: LoggingConfig::from_env(),
        })
    }
}
