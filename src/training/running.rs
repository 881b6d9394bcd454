// ABOUTME: Running workout with step-based distance and speed-driven calorie formula
// ABOUTME: Calories scale linearly with mean speed, weight, and time on feet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::constants::{METERS_PER_KM, MINUTES_PER_HOUR};
use workout_core::models::WorkoutType;

use super::{Training, TrainingBase};

/// Running session (`RUN` package: action, duration, weight)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    /// Multiplier applied to mean speed (km/h) in the calorie formula
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Shift added to the scaled mean speed in the calorie formula
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    /// Wrap validated base fields as a running session
    #[must_use]
    pub const fn new(base: TrainingBase) -> Self {
        Self { base }
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Formula: `(18 x speed + 1.79) x weight / 1000 x hours x 60`
    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg()
            / METERS_PER_KM
            * self.base.duration_hours()
            * MINUTES_PER_HOUR
    }
}
