// ABOUTME: Sensor package dispatcher selecting the workout variant from its type code
// ABOUTME: Validates value counts and field domains before constructing a WorkoutRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, warn};
use workout_core::errors::WorkoutError;
use workout_core::models::WorkoutType;

use crate::training::{Running, SportsWalking, Swimming, TrainingBase, WorkoutRecord};

/// Read a trainer sensor package into a validated workout record
///
/// Values are assigned positionally: `action`, `duration`, `weight`, then the
/// workout-specific fields (`height` for `WLK`; `length_pool`, `count_pool`
/// for `SWM`).
///
/// # Errors
///
/// Checked in this order, the first failure is returned:
/// - `WorkoutError::UnknownWorkoutType` if `workout_type` is not `SWM`, `RUN` or `WLK`
/// - `WorkoutError::ArgumentCountMismatch` if `values` does not hold exactly
///   the fields of the resolved workout
/// - `WorkoutError::DomainError` for the first field, in positional order,
///   whose value is outside its domain
///
/// # Example
///
/// ```rust
/// use workout_tracker::dispatcher::read_package;
/// use workout_tracker::training::Training;
///
/// # fn example() -> Result<(), workout_core::errors::WorkoutError> {
/// let record = read_package("RUN", &[15000.0, 1.0, 75.0])?;
/// assert!((record.distance() - 9.75).abs() < 1e-9);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn read_package(workout_type: &str, values: &[f64]) -> Result<WorkoutRecord, WorkoutError> {
    let resolved = workout_type.parse::<WorkoutType>().inspect_err(|_| {
        warn!(workout.code = %workout_type, "Rejected package with unknown workout type");
    })?;

    let record = build_record(resolved, values).inspect_err(|error| {
        warn!(
            workout.kind = %resolved,
            values.count = values.len(),
            error = %error,
            "Rejected sensor package"
        );
    })?;

    debug!(
        workout.kind = %resolved,
        workout.code = resolved.code(),
        values.count = values.len(),
        "Read sensor package"
    );
    Ok(record)
}

fn build_record(workout_type: WorkoutType, values: &[f64]) -> Result<WorkoutRecord, WorkoutError> {
    match (workout_type, values) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            let base = TrainingBase::new(action, duration, weight)?;
            Ok(Running::new(base).into())
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            let base = TrainingBase::new(action, duration, weight)?;
            Ok(SportsWalking::new(base, height)?.into())
        }
        (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            let base = TrainingBase::new(action, duration, weight)?;
            Ok(Swimming::new(base, length_pool, count_pool)?.into())
        }
        (workout_type, values) => Err(WorkoutError::argument_count_mismatch(
            workout_type,
            values.len(),
        )),
    }
}
