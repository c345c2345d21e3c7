// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, stride lengths, and calorie formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Developers

//! Constants module
//!
//! Formula constants grouped by domain. The calorie coefficients are fixed by
//! the sensor firmware's reference formulas and must not be tuned
//! independently of them.

/// Unit conversion constants
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Per-action movement lengths in meters
pub mod stride {
    /// Length of one step in meters (running and race walking)
    pub const STEP_LENGTH_M: f64 = 0.65;
    /// Length of one swim stroke in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;
}

/// Calorie formula coefficients, one submodule per workout variant
pub mod calories {
    /// Running: `(18 * speed - 20) * weight / 1000 * (duration * 60)`
    pub mod running {
        /// Multiplier applied to mean speed
        pub const SPEED_MULTIPLIER: f64 = 18.0;
        /// Offset subtracted from the speed term
        pub const SPEED_OFFSET: f64 = 20.0;
    }

    /// Race walking: `(0.035 * weight + (speed^2 // height) * 0.029 * weight) * duration * 60`
    pub mod walking {
        /// Multiplier applied directly to body weight
        pub const WEIGHT_MULTIPLIER: f64 = 0.035;
        /// Multiplier applied to the floored speed-squared-over-height term
        pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    }

    /// Swimming: `(speed + 1.1) * 2 * weight`
    pub mod swimming {
        /// Offset added to mean speed
        pub const SPEED_OFFSET: f64 = 1.1;
        /// Multiplier applied to body weight
        pub const WEIGHT_MULTIPLIER: f64 = 2.0;
    }
}
