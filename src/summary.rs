// ABOUTME: Derived workout summary record and fixed-template message rendering
// ABOUTME: Plain structured record with explicit field access, no reflection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Developers

use serde::Serialize;

/// Derived metrics for one workout session
///
/// Produced once per [`Workout`](crate::models::Workout) and consumed
/// immediately by the message renderer; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    /// Display name of the workout variant
    pub workout: &'static str,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Covered distance in km
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calorie expenditure in kcal
    pub calories: f64,
}

impl WorkoutSummary {
    /// Render the fixed summary message
    ///
    /// Fixed field order, exactly 3 decimal places on every numeric field,
    /// decimal point regardless of locale. Pure formatting; printing is the
    /// caller's responsibility.
    #[must_use]
    pub fn to_message(&self) -> String {
        let Self {
            workout,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        } = self;
        format!(
            "Тип тренировки: {workout}; \
             Длительность: {duration_hours:.3} ч.; \
             Дистанция: {distance_km:.3} км; \
             Ср. скорость: {mean_speed_kmh:.3} км/ч; \
             Потрачено ккал: {calories:.3}."
        )
    }
}
