// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Derives distance, mean speed, and calories from raw trainer sensor packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Turns raw trainer sensor packages into derived fitness metrics for three
//! workout kinds: running (`RUN`), sports walking (`WLK`) and pool swimming
//! (`SWM`).
//!
//! ## Architecture
//!
//! - **Dispatcher**: maps a type code and positional values to a validated record
//! - **Training**: per-workout distance, mean speed, and calorie formulas
//! - **Formatters**: renders the derived metrics as text or JSON
//!
//! ## Example Usage
//!
//! ```rust
//! use workout_tracker::dispatcher::read_package;
//! use workout_tracker::formatters::summarize;
//!
//! # fn example() -> workout_tracker::errors::AppResult<()> {
//! let record = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", summarize(&record));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

/// Environment-driven runtime configuration
pub mod config;

/// Sample packages for the demonstration run
pub mod demo;

/// Sensor package dispatch by workout type code
pub mod dispatcher;

/// Error types re-exported from `workout-core`
pub mod errors;

/// Summary rendering (text template, JSON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Workout records and their derived metrics
pub mod training;
