// ABOUTME: Pool swimming workout whose distance comes from pool geometry
// ABOUTME: Distance is pool length times lap count; stroke count does not enter the formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::constants::METERS_PER_KM;
use workout_core::errors::WorkoutError;
use workout_core::models::WorkoutType;

use super::base::ensure_positive;
use super::{Training, TrainingBase};

/// Pool swimming session (`SWM` package: action, duration, weight, `length_pool`, `count_pool`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool_m: f64,
    count_pool: f64,
}

impl Swimming {
    /// Shift added to mean speed in the calorie formula
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to the shifted speed in the calorie formula
    pub const CALORIES_SPEED_MULTIPLIER: f64 = 2.0;

    /// Attach pool geometry to validated base fields
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::DomainError` if the pool length or lap count is
    /// not a finite value greater than zero
    pub fn new(
        base: TrainingBase,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            base,
            length_pool_m: ensure_positive("length_pool", length_pool_m)?,
            count_pool: ensure_positive("count_pool", count_pool)?,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool_m(&self) -> f64 {
        self.length_pool_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn distance(&self) -> f64 {
        self.length_pool_m * self.count_pool / METERS_PER_KM
    }

    /// Formula: `(speed + 1.1) x 2 x weight x hours`
    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_SPEED_MULTIPLIER
            * self.base.weight_kg()
            * self.base.duration_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swimming(action: f64, length_pool_m: f64, count_pool: f64) -> Swimming {
        let base = TrainingBase::new(action, 1.0, 80.0).unwrap();
        Swimming::new(base, length_pool_m, count_pool).unwrap()
    }

    #[test]
    fn test_distance_ignores_strokes() {
        assert!((swimming(720.0, 25.0, 40.0).distance() - 1.0).abs() < 1e-9);
        assert!((swimming(5000.0, 25.0, 40.0).distance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_calories() {
        let workout = swimming(720.0, 25.0, 40.0);
        assert!((workout.mean_speed() - 1.0).abs() < 1e-9);
        assert!((workout.spent_calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_pool_geometry() {
        assert!((swimming(720.0, 25.5, 40.0).distance() - 1.02).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_empty_pool() {
        let base = TrainingBase::new(720.0, 1.0, 80.0).unwrap();
        assert!(matches!(
            Swimming::new(base, 0.0, 40.0),
            Err(WorkoutError::DomainError {
                field: "length_pool",
                ..
            })
        ));
        assert!(matches!(
            Swimming::new(base, 25.0, 0.0),
            Err(WorkoutError::DomainError {
                field: "count_pool",
                ..
            })
        ));
    }
}
