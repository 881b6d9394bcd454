// ABOUTME: Workout type enumeration for trainer sensor packages
// ABOUTME: Maps package type codes (SWM, RUN, WLK) to workout kinds and their field layouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use crate::errors::WorkoutError;

/// Workout kinds a trainer can report
///
/// Variants are declared in the order their type codes are advertised:
/// `SWM`, `RUN`, `WLK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    /// Pool swimming (`SWM`)
    Swimming,
    /// Running (`RUN`)
    Running,
    /// Sports walking (`WLK`)
    SportsWalking,
}

impl WorkoutType {
    /// All workout types in declared order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Sensor package type code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Label rendered as the training type in summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Positional field names of this workout's sensor package
    ///
    /// Base fields come first, followed by the variant-specific ones.
    #[must_use]
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of values a sensor package of this type must carry
    #[must_use]
    pub const fn expected_field_count(self) -> usize {
        self.field_names().len()
    }

    /// Comma-separated list of the recognized type codes, in declared order
    #[must_use]
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(|workout_type| workout_type.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutError;

    /// Resolve a package type code. Codes are matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|workout_type| workout_type.code() == s)
            .ok_or_else(|| WorkoutError::unknown_workout_type(s))
    }
}
