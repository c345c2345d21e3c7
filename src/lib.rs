// ABOUTME: Fitness tracker calculator library for sensor-packet workout summaries
// ABOUTME: Computes distance, mean speed, and calorie expenditure per workout variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Developers

#![deny(unsafe_code)]

//! # Fittrack
//!
//! Small fitness-tracker calculator: raw sensor readings for one of three
//! workout variants (swimming, running, race walking) are dispatched by type
//! code, turned into a [`Workout`], and reduced to a [`WorkoutSummary`] with
//! distance, mean speed, and calorie expenditure, then rendered through a
//! fixed message template.
//!
//! ## Modules
//!
//! - **constants**: formula constants organized by domain
//! - **errors**: structured error handling with `TrackerError`
//! - **models**: the `Workout` variant set and its formula methods
//! - **summary**: derived `WorkoutSummary` record and message rendering
//! - **dispatch**: sensor-packet dispatcher (type code to constructor)

/// Formula constants organized by domain
pub mod constants;

/// Sensor-packet dispatcher mapping type codes to workout constructors
pub mod dispatch;

/// Structured error handling with `TrackerError` and `TrackerResult`
pub mod errors;

/// Workout variant set with per-variant distance, speed, and calorie formulas
pub mod models;

/// Derived workout summary record and fixed-template message rendering
pub mod summary;

pub use dispatch::read_packet;
pub use errors::{TrackerError, TrackerResult};
pub use models::Workout;
pub use summary::WorkoutSummary;
