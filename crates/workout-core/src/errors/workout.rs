// ABOUTME: Validation errors raised while reading trainer sensor packages
// ABOUTME: Covers unknown type codes, wrong value counts, and out-of-domain values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::WorkoutType;

use super::ErrorCode;

/// Errors produced while turning a sensor package into a workout record
///
/// Construction is atomic: any of these aborts before a record exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    /// The package type code is not one of the recognized codes
    #[error("Unknown workout type '{code}'. Valid options: {valid}")]
    UnknownWorkoutType {
        /// Type code that was supplied
        code: String,
        /// Recognized codes in declared order
        valid: String,
    },

    /// The package carries a different number of values than the workout declares
    #[error("{workout_type} package expects {expected} values ({fields}), got {actual}")]
    ArgumentCountMismatch {
        /// Workout type resolved from the type code
        workout_type: WorkoutType,
        /// Number of fields the workout declares
        expected: usize,
        /// Number of values supplied
        actual: usize,
        /// Field names in positional order
        fields: String,
    },

    /// A value lies outside the physical domain of its field
    #[error("Invalid value {value} for '{field}': {reason}")]
    DomainError {
        /// Field the value was assigned to
        field: &'static str,
        /// Offending value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },
}

impl WorkoutError {
    /// Create an "unknown workout type" error listing the recognized codes
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType {
            code: code.into(),
            valid: WorkoutType::valid_codes(),
        }
    }

    /// Create an "argument count mismatch" error for a resolved workout type
    #[must_use]
    pub fn argument_count_mismatch(workout_type: WorkoutType, actual: usize) -> Self {
        Self::ArgumentCountMismatch {
            workout_type,
            expected: workout_type.expected_field_count(),
            actual,
            fields: workout_type.field_names().join(", "),
        }
    }

    /// Create a domain error for a field value
    #[must_use]
    pub const fn domain(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::DomainError {
            field,
            value,
            reason,
        }
    }

    /// Standard error code for this failure
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownWorkoutType { .. } => ErrorCode::UnknownWorkoutType,
            Self::ArgumentCountMismatch { .. } => ErrorCode::ArgumentCountMismatch,
            Self::DomainError { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}
