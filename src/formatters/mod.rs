// ABOUTME: Workout summary rendering in the fixed text template or JSON
// ABOUTME: Defines InfoMessage, the OutputFormat selector, and summary helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! A workout record is summarized once into an [`InfoMessage`] and then
//! rendered in one of two formats:
//!
//! - **Text**: the fixed human-readable template, every number with three decimals
//! - **JSON**: the same fields serialized with serde, unrounded
//!
//! ## Usage
//!
//! ```rust
//! use workout_tracker::dispatcher::read_package;
//! use workout_tracker::formatters::summarize;
//!
//! # fn example() -> Result<(), workout_core::errors::WorkoutError> {
//! let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//! assert_eq!(
//!     summarize(&record),
//!     "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 1.000 км; \
//!      Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use workout_core::errors::AppError;

use crate::training::{Training, WorkoutRecord};

/// Derived metrics of one workout, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    /// Workout label (`Running`, `SportsWalking`, `Swimming`)
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in km
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories burned
    pub calories: f64,
}

impl InfoMessage {
    /// Bundle derived metrics under a workout label
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the fixed summary template
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed human-readable template (default)
    #[default]
    Text,
    /// JSON document with unrounded metrics
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    /// Parse a format name (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown output format '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.message.clone()).with_source(error)
    }
}

/// Render a workout summary in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output(info: &InfoMessage, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(info.message()),
        OutputFormat::Json => serde_json::to_string(info).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        }),
    }
}

/// Summarize a workout record with the fixed text template
#[must_use]
pub fn summarize(record: &WorkoutRecord) -> String {
    record.show_training_info().message()
}
