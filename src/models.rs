// ABOUTME: Workout variant set with per-variant distance, speed, and calorie formulas
// ABOUTME: Tagged enum carrying each variant's sensor inputs, dispatched by match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Developers

// Plain arithmetic only in formula bodies: evaluation order is part of the
// numeric contract, so no mul_add rewrites.
#![allow(clippy::suboptimal_flops)]

use crate::constants::{calories, stride, units};
use crate::errors::TrackerResult;
use crate::summary::WorkoutSummary;
use serde::{Deserialize, Serialize};

/// A recorded workout session, one variant per supported workout kind
///
/// Each variant carries the sensor inputs its formulas need. Values are
/// immutable once constructed; the derived summary is computed on demand.
///
/// Distance is based on the action count (steps or strokes), mean speed on
/// distance over duration, except swimming where the pool geometry defines
/// the speed independently of stroke count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workout {
    /// Running session
    ///
    /// Calories: `(18 * speed - 20) * weight / 1000 * (duration * 60)`
    ///
    /// The formula goes negative below ~1.1 km/h mean speed; implausible
    /// inputs are not guarded against.
    Running {
        /// Step count from the motion sensor
        action_count: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
    },

    /// Race-walking session
    ///
    /// Calories: `(0.035 * weight + (speed^2 // height) * 0.029 * weight) * duration * 60`
    ///
    /// The height term floors the quotient of speed squared over height
    /// (floor division, not ordinary division).
    SportsWalking {
        /// Step count from the motion sensor
        action_count: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Athlete height in cm
        height_cm: u32,
    },

    /// Swimming session
    ///
    /// Calories: `(speed + 1.1) * 2 * weight`
    Swimming {
        /// Stroke count from the motion sensor
        action_count: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: u32,
        /// Number of completed pool laps
        pool_laps: u32,
    },
}

impl Workout {
    /// Get the human-readable name for this workout variant
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running { .. } => "Running",
            Self::SportsWalking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }

    /// Get the sensor-packet type code for this workout variant
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running { .. } => "RUN",
            Self::SportsWalking { .. } => "WLK",
            Self::Swimming { .. } => "SWM",
        }
    }

    /// Session duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::SportsWalking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    /// Athlete body weight in kg
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        match self {
            Self::Running { weight_kg, .. }
            | Self::SportsWalking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. } => *weight_kg,
        }
    }

    /// Covered distance in km, derived from the action count
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        let (action_count, action_length_m) = match self {
            Self::Running { action_count, .. } | Self::SportsWalking { action_count, .. } => {
                (*action_count, stride::STEP_LENGTH_M)
            }
            Self::Swimming { action_count, .. } => (*action_count, stride::STROKE_LENGTH_M),
        };
        f64::from(action_count) * action_length_m / units::METERS_PER_KM
    }

    /// Mean speed over the full session in km/h
    ///
    /// Swimming derives speed from the pool geometry rather than the stroke
    /// count; the other variants divide distance by duration.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming {
                duration_hours,
                pool_length_m,
                pool_laps,
                ..
            } => {
                f64::from(*pool_length_m) * f64::from(*pool_laps)
                    / units::METERS_PER_KM
                    / duration_hours
            }
            Self::Running { .. } | Self::SportsWalking { .. } => {
                self.distance_km() / self.duration_hours()
            }
        }
    }

    /// Calorie expenditure for the session
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnimplementedFormula`] for a variant that does
    /// not define a calorie formula. All built-in variants define one, so the
    /// error cannot occur today; the contract exists for variants added later.
    ///
    /// [`TrackerError::UnimplementedFormula`]: crate::errors::TrackerError::UnimplementedFormula
    pub fn spent_calories(&self) -> TrackerResult<f64> {
        let speed = self.mean_speed_kmh();
        match self {
            Self::Running {
                duration_hours,
                weight_kg,
                ..
            } => Ok(
                (calories::running::SPEED_MULTIPLIER * speed - calories::running::SPEED_OFFSET)
                    * weight_kg
                    / units::METERS_PER_KM
                    * (duration_hours * units::MINUTES_PER_HOUR),
            ),
            Self::SportsWalking {
                duration_hours,
                weight_kg,
                height_cm,
                ..
            } => {
                // Floor division of speed^2 by height, kept exactly as the
                // reference formula evaluates it.
                let height_term = (speed * speed / f64::from(*height_cm)).floor();
                Ok((calories::walking::WEIGHT_MULTIPLIER * weight_kg
                    + height_term * calories::walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_hours
                    * units::MINUTES_PER_HOUR)
            }
            Self::Swimming { weight_kg, .. } => Ok((speed + calories::swimming::SPEED_OFFSET)
                * calories::swimming::WEIGHT_MULTIPLIER
                * weight_kg),
        }
    }

    /// Compute the derived summary for this session
    ///
    /// # Errors
    ///
    /// Propagates the calorie-formula error for a variant without one.
    pub fn summary(&self) -> TrackerResult<WorkoutSummary> {
        Ok(WorkoutSummary {
            workout: self.name(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories()?,
        })
    }
}
