// ABOUTME: Sample sensor packages driving the demonstration run
// ABOUTME: Reads each package and renders its summary in the requested format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;

use crate::dispatcher::read_package;
use crate::errors::AppResult;
use crate::formatters::{format_output, OutputFormat};
use crate::training::Training;

/// Sample packages as a trainer would send them: type code and raw values
pub const DEMO_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Read one package and render its summary
///
/// # Errors
///
/// Returns `AppError` if the package is rejected or rendering fails
pub fn summarize_package(
    workout_type: &str,
    values: &[f64],
    format: OutputFormat,
) -> AppResult<String> {
    let record = read_package(workout_type, values)?;
    Ok(format_output(&record.show_training_info(), format)?)
}

/// Summarize every sample package, one rendered line per package
///
/// # Errors
///
/// Returns the first `AppError` raised by a package
pub fn run_demo(format: OutputFormat) -> AppResult<Vec<String>> {
    info!(packages = DEMO_PACKAGES.len(), format = %format, "Running demo packages");
    DEMO_PACKAGES
        .iter()
        .map(|(workout_type, values)| summarize_package(workout_type, values, format))
        .collect()
}
