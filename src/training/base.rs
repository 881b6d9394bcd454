// ABOUTME: Shared sensor fields of every workout and their domain validation
// ABOUTME: Holds step count, duration, and weight with finiteness and sign checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::constants::METERS_PER_KM;
use workout_core::errors::WorkoutError;

/// Sensor fields common to every workout
///
/// `action` counts steps for running and walking, strokes for swimming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    action: f64,
    duration_hours: f64,
    weight_kg: f64,
}

impl TrainingBase {
    /// Validate and bundle the shared fields
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::DomainError` if `action` is negative or not
    /// finite, or if duration or weight is not a finite value greater than zero
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action: ensure_non_negative("action", action)?,
            duration_hours: ensure_positive("duration", duration_hours)?,
            weight_kg: ensure_positive("weight", weight_kg)?,
        })
    }

    /// Steps or strokes recorded by the trainer
    #[must_use]
    pub const fn action(&self) -> f64 {
        self.action
    }

    /// Workout duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Distance in km covered by `action` steps of `step_length_m` meters
    #[must_use]
    pub fn step_distance_km(&self, step_length_m: f64) -> f64 {
        self.action * step_length_m / METERS_PER_KM
    }
}

/// Accept a finite value strictly greater than zero
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::domain(field, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(WorkoutError::domain(
            field,
            value,
            "must be greater than zero",
        ));
    }
    Ok(value)
}

/// Accept a finite value of zero or more
fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::domain(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(WorkoutError::domain(field, value, "must not be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_duration() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = TrainingBase::new(100.0, duration, 70.0);
            assert!(
                matches!(
                    result,
                    Err(WorkoutError::DomainError {
                        field: "duration",
                        ..
                    })
                ),
                "duration {duration} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let result = TrainingBase::new(100.0, 1.0, 0.0);
        assert!(matches!(
            result,
            Err(WorkoutError::DomainError { field: "weight", .. })
        ));
    }

    #[test]
    fn test_duration_checked_before_weight() {
        let result = TrainingBase::new(100.0, 0.0, -5.0);
        assert!(matches!(
            result,
            Err(WorkoutError::DomainError {
                field: "duration",
                ..
            })
        ));
    }

    #[test]
    fn test_action_accepts_fractional_and_large_counts() {
        for action in [0.0, 1.5, 15000.0, 5e9] {
            let base = TrainingBase::new(action, 1.0, 70.0).unwrap();
            assert!((base.action() - action).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_action_rejects_negative_and_non_finite() {
        for action in [-1.0, f64::NAN, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    TrainingBase::new(action, 1.0, 70.0),
                    Err(WorkoutError::DomainError { field: "action", .. })
                ),
                "action {action} should be rejected"
            );
        }
    }

    #[test]
    fn test_step_distance() {
        let base = TrainingBase::new(1000.0, 1.0, 70.0).unwrap();
        assert!((base.step_distance_km(0.65) - 0.65).abs() < 1e-12);
    }
}
