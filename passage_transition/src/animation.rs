// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation timing handed to the host animator.
//!
//! ```
//! use passage_transition::{Animation, TimingCurve};
//!
//! let animation = Animation::ease_out(0.5).speed(2.0);
//! assert_eq!(animation.duration, 0.25);
//! assert_eq!(animation.curve, TimingCurve::EaseOut);
//! ```

use kurbo::Point;

/// The timing curve of an animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimingCurve {
    /// Slow start and end.
    EaseInOut,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Constant speed.
    Linear,
    /// A cubic Bézier from `(0, 0)` to `(1, 1)` with two control points.
    CubicBezier {
        /// First control point.
        c0: Point,
        /// Second control point.
        c1: Point,
    },
    /// A damped spring.
    Spring {
        /// Mass attached to the spring.
        mass: f64,
        /// Spring stiffness.
        stiffness: f64,
        /// Damping coefficient.
        damping: f64,
        /// Initial velocity, relative to the total distance.
        initial_velocity: f64,
    },
}

/// Duration and timing of a transition's animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation {
    /// Duration in seconds.
    pub duration: f64,
    /// Timing curve.
    pub curve: TimingCurve,
}

impl Default for Animation {
    fn default() -> Self {
        Self::ease_in_out(Self::DEFAULT_DURATION)
    }
}

impl Animation {
    /// Duration used when none is given, in seconds.
    pub const DEFAULT_DURATION: f64 = 0.35;

    /// Ease-in-out over the default duration.
    pub const EASE_IN_OUT: Self = Self::ease_in_out(Self::DEFAULT_DURATION);
    /// Ease-in over the default duration.
    pub const EASE_IN: Self = Self::ease_in(Self::DEFAULT_DURATION);
    /// Ease-out over the default duration.
    pub const EASE_OUT: Self = Self::ease_out(Self::DEFAULT_DURATION);
    /// Linear over the default duration.
    pub const LINEAR: Self = Self::linear(Self::DEFAULT_DURATION);

    /// An animation with an explicit curve.
    pub const fn new(duration: f64, curve: TimingCurve) -> Self {
        Self { duration, curve }
    }

    /// Ease-in-out over `duration` seconds.
    pub const fn ease_in_out(duration: f64) -> Self {
        Self::new(duration, TimingCurve::EaseInOut)
    }

    /// Ease-in over `duration` seconds.
    pub const fn ease_in(duration: f64) -> Self {
        Self::new(duration, TimingCurve::EaseIn)
    }

    /// Ease-out over `duration` seconds.
    pub const fn ease_out(duration: f64) -> Self {
        Self::new(duration, TimingCurve::EaseOut)
    }

    /// Linear over `duration` seconds.
    pub const fn linear(duration: f64) -> Self {
        Self::new(duration, TimingCurve::Linear)
    }

    /// A cubic Bézier timing curve over `duration` seconds.
    pub const fn timing_curve(c0x: f64, c0y: f64, c1x: f64, c1y: f64, duration: f64) -> Self {
        Self::new(
            duration,
            TimingCurve::CubicBezier {
                c0: Point::new(c0x, c0y),
                c1: Point::new(c1x, c1y),
            },
        )
    }

    /// A cubic Bézier timing curve over the default duration.
    pub const fn bezier(c0: Point, c1: Point) -> Self {
        Self::new(Self::DEFAULT_DURATION, TimingCurve::CubicBezier { c0, c1 })
    }

    /// A spring; the host settles it within the default duration.
    pub const fn interpolating_spring(
        mass: f64,
        stiffness: f64,
        damping: f64,
        initial_velocity: f64,
    ) -> Self {
        Self::new(
            Self::DEFAULT_DURATION,
            TimingCurve::Spring {
                mass,
                stiffness,
                damping,
                initial_velocity,
            },
        )
    }

    /// Return a copy that runs `speed` times faster.
    #[must_use]
    pub fn speed(self, speed: f64) -> Self {
        Self {
            duration: self.duration / speed,
            ..self
        }
    }
}
