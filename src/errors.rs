// ABOUTME: Error types for workout dispatch and calorie formula resolution
// ABOUTME: Defines TrackerError variants with context fields and constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Developers

//! # Error Handling
//!
//! Structured error types for the tracker calculator:
//! - `TrackerError` - dispatch and formula-resolution failures
//! - `TrackerResult` - result alias used throughout the crate
//!
//! All errors surface immediately to the caller; nothing is retried or
//! swallowed. A failed sensor packet aborts only that packet's processing.

use thiserror::Error;

/// Errors raised while dispatching sensor packets and computing summaries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Sensor packet carried a type code outside the known variant set
    #[error("unknown workout type {code:?}, valid codes: {valid_codes}")]
    InvalidWorkoutType {
        /// The offending type code
        code: String,
        /// Comma-separated list of accepted codes
        valid_codes: String,
    },

    /// Sensor packet data did not match the variant's constructor arity
    #[error("workout type {code} expects {expected} sensor values, got {actual}")]
    InvalidArguments {
        /// Type code of the targeted variant
        code: String,
        /// Number of values the variant's constructor takes
        expected: usize,
        /// Number of values the packet actually carried
        actual: usize,
    },

    /// A workout variant does not define a calorie formula
    ///
    /// Structurally unreachable for the three built-in variants; kept as a
    /// distinct, reported condition so a variant added without a formula
    /// fails loudly at first use instead of panicking.
    #[error("no calorie formula defined for workout type {workout}")]
    UnimplementedFormula {
        /// Display name of the formula-less variant
        workout: &'static str,
    },
}

impl TrackerError {
    /// Create an "unknown workout type" error
    #[must_use]
    pub fn invalid_workout_type(code: impl Into<String>, valid: &[&str]) -> Self {
        Self::InvalidWorkoutType {
            code: code.into(),
            valid_codes: valid.join(", "),
        }
    }

    /// Create a "wrong packet arity" error
    #[must_use]
    pub fn invalid_arguments(code: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidArguments {
            code: code.into(),
            expected,
            actual,
        }
    }

    /// Create a "missing calorie formula" error
    #[must_use]
    pub const fn unimplemented_formula(workout: &'static str) -> Self {
        Self::UnimplementedFormula { workout }
    }
}

/// Result type alias for convenience
pub type TrackerResult<T> = Result<T, TrackerError>;
