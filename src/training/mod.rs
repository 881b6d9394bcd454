// ABOUTME: Workout records and the shared metric interface for trainer sensor packages
// ABOUTME: Defines the Training trait, per-workout variants, and the WorkoutRecord sum type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Records
//!
//! Every workout exposes three derived metrics through [`Training`]:
//!
//! - **distance** in km, step based unless the workout supplies its own
//! - **mean speed** in km/h, distance divided by duration
//! - **spent calories**, always workout specific
//!
//! Records are validated on construction and never mutated afterwards, so the
//! metrics are pure functions of the stored fields.

/// Shared sensor fields and domain validation
pub mod base;
/// Running workout
pub mod running;
/// Sports walking workout
pub mod sports_walking;
/// Pool swimming workout
pub mod swimming;

pub use base::TrainingBase;
pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;

use workout_core::models::WorkoutType;

use crate::formatters::InfoMessage;

/// Step length in meters used by step-based workouts
pub const LEN_STEP: f64 = 0.65;

/// Metrics every workout derives from its sensor fields
pub trait Training {
    /// Kind of workout this record describes
    fn workout_type(&self) -> WorkoutType;

    /// Shared sensor fields
    fn base(&self) -> &TrainingBase;

    /// Distance covered in km
    fn distance(&self) -> f64 {
        self.base().step_distance_km(LEN_STEP)
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration_hours()
    }

    /// Calories burned over the whole workout
    fn spent_calories(&self) -> f64;

    /// Collect the derived metrics into a summary value
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.workout_type().label(),
            self.base().duration_hours(),
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// A validated workout of any supported kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutRecord {
    /// Pool swimming
    Swimming(Swimming),
    /// Running
    Running(Running),
    /// Sports walking
    SportsWalking(SportsWalking),
}

impl WorkoutRecord {
    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Swimming(workout) => workout,
            Self::Running(workout) => workout,
            Self::SportsWalking(workout) => workout,
        }
    }
}

impl Training for WorkoutRecord {
    fn workout_type(&self) -> WorkoutType {
        self.as_training().workout_type()
    }

    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for WorkoutRecord {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for WorkoutRecord {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_delegates_to_variant() {
        let base = TrainingBase::new(720.0, 1.0, 80.0).unwrap();
        let swimming = Swimming::new(base, 25.0, 40.0).unwrap();
        let record = WorkoutRecord::from(swimming);

        assert_eq!(record.workout_type(), WorkoutType::Swimming);
        assert!((record.distance() - swimming.distance()).abs() < f64::EPSILON);
        assert!((record.spent_calories() - swimming.spent_calories()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_show_training_info_collects_metrics() {
        let base = TrainingBase::new(15000.0, 1.0, 75.0).unwrap();
        let record = WorkoutRecord::from(Running::new(base));
        let info = record.show_training_info();

        assert_eq!(info.training_type, "Running");
        assert!((info.duration - 1.0).abs() < f64::EPSILON);
        assert!((info.distance - 9.75).abs() < 1e-9);
        assert!((info.speed - 9.75).abs() < 1e-9);
        assert!((info.calories - record.spent_calories()).abs() < f64::EPSILON);
    }
}
