// ABOUTME: Error types re-exported from workout-core for crate-local imports
// ABOUTME: AppError, ErrorCode, ErrorResponse, and WorkoutError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::errors::*;
