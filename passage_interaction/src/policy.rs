// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! When a released gesture completes its transition, and how fast.

/// Outcome of a released gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Run the transition to its end.
    Complete,
    /// Return to where the transition started.
    Cancel,
}

/// Thresholds for resolving a released gesture.
///
/// Velocities are in points per second along the gesture axis; percent is the
/// fraction of the view the gesture has crossed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompletionPolicy {
    /// Release faster than this always completes.
    pub flick_velocity: f64,
    /// Crossing at least this fraction completes unless flung back.
    pub min_percent: f64,
    /// Release slower than this (moving backwards) cancels a partial gesture.
    pub min_velocity: f64,
    /// Velocity that maps to a completion speed of `1.0`.
    pub velocity_per_speed: f64,
    /// Slowest completion speed.
    pub min_speed: f64,
    /// Fastest completion speed.
    pub max_speed: f64,
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self {
            flick_velocity: 675.0,
            min_percent: 0.2,
            min_velocity: -200.0,
            velocity_per_speed: 800.0,
            min_speed: 0.99,
            max_speed: 2.25,
        }
    }
}

impl CompletionPolicy {
    /// Resolve a gesture released at `velocity` after crossing `percent`.
    pub fn decide(&self, velocity: f64, percent: f64) -> Resolution {
        if velocity > self.flick_velocity
            || (percent >= self.min_percent && velocity > self.min_velocity)
        {
            Resolution::Complete
        } else {
            Resolution::Cancel
        }
    }

    /// Speed multiplier for the remaining animation after a release at `velocity`.
    pub fn completion_speed(&self, velocity: f64) -> f64 {
        (velocity / self.velocity_per_speed)
            .max(self.min_speed)
            .min(self.max_speed)
    }
}

/// [`CompletionPolicy::decide`] with the default thresholds.
pub fn decide(velocity: f64, percent: f64) -> Resolution {
    CompletionPolicy::default().decide(velocity, percent)
}

/// [`CompletionPolicy::completion_speed`] with the default thresholds.
pub fn completion_speed(velocity: f64) -> f64 {
    CompletionPolicy::default().completion_speed(velocity)
}
