// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Re-exports environment-driven output and logging configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and runtime configuration
pub mod environment;

pub use environment::{LogLevel, TrackerConfig};
