// ABOUTME: Core data models shared across the workout tracker
// ABOUTME: Re-exports the workout type enumeration and its type codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Workout type enumeration with sensor package type codes
pub mod workout_type;

pub use workout_type::WorkoutType;
