// ABOUTME: Sensor-packet dispatcher mapping type codes to workout constructors
// ABOUTME: Static lookup table with explicit arity validation per variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Developers

use crate::errors::{TrackerError, TrackerResult};
use crate::models::Workout;
use tracing::debug;

/// Constructor taking the variant's full, already-validated value list
type Constructor = fn(&[f64]) -> Workout;

/// Dispatch table: type code, constructor arity, constructor
///
/// Packet values are positional: action count, duration (hours), weight (kg),
/// then the variant-specific extras in the order listed per constructor.
const DISPATCH_TABLE: [(&str, usize, Constructor); 3] = [
    ("SWM", 5, build_swimming),
    ("RUN", 3, build_running),
    ("WLK", 4, build_walking),
];

fn build_swimming(data: &[f64]) -> Workout {
    Workout::Swimming {
        action_count: data[0] as u32,
        duration_hours: data[1],
        weight_kg: data[2],
        pool_length_m: data[3] as u32,
        pool_laps: data[4] as u32,
    }
}

fn build_running(data: &[f64]) -> Workout {
    Workout::Running {
        action_count: data[0] as u32,
        duration_hours: data[1],
        weight_kg: data[2],
    }
}

fn build_walking(data: &[f64]) -> Workout {
    Workout::SportsWalking {
        action_count: data[0] as u32,
        duration_hours: data[1],
        weight_kg: data[2],
        height_cm: data[3] as u32,
    }
}

/// The accepted sensor-packet type codes, in dispatch-table order
#[must_use]
pub fn valid_codes() -> Vec<&'static str> {
    DISPATCH_TABLE.iter().map(|(code, ..)| *code).collect()
}

/// Read one sensor packet and construct the matching workout
///
/// `data` is the ordered numeric value list for the selected variant's
/// constructor: 3 values for `RUN`, 4 for `WLK`, 5 for `SWM`.
///
/// # Errors
///
/// - [`TrackerError::InvalidWorkoutType`] if `code` is not in the dispatch
///   table; the error names the offending code and lists the valid ones.
/// - [`TrackerError::InvalidArguments`] if `data` does not match the
///   variant's constructor arity. Packets are never truncated or padded.
pub fn read_packet(code: &str, data: &[f64]) -> TrackerResult<Workout> {
    let Some((_, arity, build)) = DISPATCH_TABLE.iter().find(|(c, ..)| *c == code) else {
        return Err(TrackerError::invalid_workout_type(code, &valid_codes()));
    };

    if data.len() != *arity {
        return Err(TrackerError::invalid_arguments(code, *arity, data.len()));
    }

    let workout = build(data);
    debug!(code, workout = workout.name(), "parsed sensor packet");
    Ok(workout)
}
