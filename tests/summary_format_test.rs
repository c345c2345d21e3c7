// ABOUTME: Tests for summary message rendering and serialization shape
// ABOUTME: Covers exact template output, 3-decimal rounding, and serde field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::dispatch::read_packet;
use fittrack::models::Workout;
use fittrack::summary::WorkoutSummary;
use serde_json::json;

fn summarize(code: &str, data: &[f64]) -> WorkoutSummary {
    read_packet(code, data).unwrap().summary().unwrap()
}

// === Template output for the demo packets ===

#[test]
fn test_swimming_message() {
    let message = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).to_message();
    assert_eq!(
        message,
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn test_running_message() {
    let message = summarize("RUN", &[15_000.0, 1.0, 75.0]).to_message();
    assert_eq!(
        message,
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
}

#[test]
fn test_walking_message() {
    let message = summarize("WLK", &[9_000.0, 1.0, 75.0, 180.0]).to_message();
    assert_eq!(
        message,
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

// === Rounding behavior ===

#[test]
fn test_every_numeric_field_shows_three_decimals() {
    let summary = WorkoutSummary {
        workout: "Running",
        duration_hours: 0.123_456,
        distance_km: 10.0,
        mean_speed_kmh: 81.000_4,
        calories: 1_234.567_89,
    };
    assert_eq!(
        summary.to_message(),
        "Тип тренировки: Running; Длительность: 0.123 ч.; Дистанция: 10.000 км; \
         Ср. скорость: 81.000 км/ч; Потрачено ккал: 1234.568."
    );
}

#[test]
fn test_formatting_already_rounded_values_is_idempotent() {
    let rounded = WorkoutSummary {
        workout: "Swimming",
        duration_hours: 1.0,
        distance_km: 0.994,
        mean_speed_kmh: 1.0,
        calories: 336.0,
    };
    let first = rounded.to_message();
    assert_eq!(first, rounded.to_message());
    assert_eq!(
        first,
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

// === Serialization shape ===

#[test]
fn test_summary_serializes_with_snake_case_fields() {
    let summary = WorkoutSummary {
        workout: "Running",
        duration_hours: 1.0,
        distance_km: 9.75,
        mean_speed_kmh: 9.75,
        calories: 699.75,
    };
    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "workout": "Running",
            "duration_hours": 1.0,
            "distance_km": 9.75,
            "mean_speed_kmh": 9.75,
            "calories": 699.75,
        })
    );
}

#[test]
fn test_workout_round_trips_through_json() {
    let workout = Workout::Swimming {
        action_count: 720,
        duration_hours: 1.0,
        weight_kg: 80.0,
        pool_length_m: 25,
        pool_laps: 40,
    };
    let value = serde_json::to_value(&workout).unwrap();
    assert_eq!(
        value,
        json!({
            "swimming": {
                "action_count": 720,
                "duration_hours": 1.0,
                "weight_kg": 80.0,
                "pool_length_m": 25,
                "pool_laps": 40,
            }
        })
    );
    let back: Workout = serde_json::from_value(value).unwrap();
    assert_eq!(back, workout);
}
