// ABOUTME: Application constants organized by domain
// ABOUTME: Unit conversions and service identifiers used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants for distance and time
pub mod units;

pub use units::{CENTIMETERS_PER_METER, METERS_PER_KM, MINUTES_PER_HOUR};

/// Service identifiers for structured logging
pub mod service_names {
    /// Workout tracker service
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
}

/// Environment variable names read by the runtime configuration
pub mod env_config {
    /// Summary output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";
    /// Log level used when `RUST_LOG` is not set
    pub const LOG_LEVEL: &str = "WORKOUT_LOG_LEVEL";
    /// Log output format (`pretty`, `compact`, `json`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source file and line numbers in log records when present
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}
