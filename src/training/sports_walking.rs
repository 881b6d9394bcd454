// ABOUTME: Sports walking workout adding athlete height to the calorie formula
// ABOUTME: Calories combine a weight term with a speed-squared over height term
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::constants::{CENTIMETERS_PER_METER, MINUTES_PER_HOUR};
use workout_core::errors::WorkoutError;
use workout_core::models::WorkoutType;

use super::base::ensure_positive;
use super::{Training, TrainingBase};

/// Sports walking session (`WLK` package: action, duration, weight, height)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height_cm: f64,
}

impl SportsWalking {
    /// Weight coefficient of the resting term
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight coefficient of the speed-squared over height term
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// km/h to m/s conversion factor used by the formula
    pub const KMH_IN_MSEC: f64 = 0.278;

    /// Attach athlete height to validated base fields
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::DomainError` if height is not a finite value
    /// greater than zero
    pub fn new(base: TrainingBase, height_cm: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            base,
            height_cm: ensure_positive("height", height_cm)?,
        })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Formula: `(0.035 x weight + (v^2 / height_m) x 0.029 x weight) x minutes`
    /// with `v` the mean speed converted to m/s
    fn spent_calories(&self) -> f64 {
        let speed_m_sec = self.mean_speed() * Self::KMH_IN_MSEC;
        let weight = self.base.weight_kg();
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_m_sec.powi(2) / (self.height_cm / CENTIMETERS_PER_METER))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * (self.base.duration_hours() * MINUTES_PER_HOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_height() {
        let base = TrainingBase::new(9000.0, 1.0, 75.0).unwrap();
        assert!(matches!(
            SportsWalking::new(base, 0.0),
            Err(WorkoutError::DomainError { field: "height", .. })
        ));
    }

    #[test]
    fn test_distance_and_speed() {
        let base = TrainingBase::new(9000.0, 1.0, 75.0).unwrap();
        let workout = SportsWalking::new(base, 180.0).unwrap();
        assert!((workout.distance() - 5.85).abs() < 1e-9);
        assert!((workout.mean_speed() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_calories() {
        let base = TrainingBase::new(9000.0, 1.0, 75.0).unwrap();
        let workout = SportsWalking::new(base, 180.0).unwrap();
        let speed_m_sec: f64 = 5.85 * 0.278;
        let expected = (0.035 * 75.0 + (speed_m_sec * speed_m_sec / 1.8) * 0.029 * 75.0) * 60.0;
        assert!((workout.spent_calories() - expected).abs() < 1e-9);
        assert!((workout.spent_calories() - 349.251_747_525).abs() < 1e-6);
    }

    #[test]
    fn test_taller_athlete_burns_less_at_same_speed() {
        let base = TrainingBase::new(9000.0, 1.0, 75.0).unwrap();
        let short = SportsWalking::new(base, 160.0).unwrap();
        let tall = SportsWalking::new(base, 200.0).unwrap();
        assert!(short.spent_calories() > tall.spent_calories());
    }
}
