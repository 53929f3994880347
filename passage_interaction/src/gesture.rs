// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan gesture as the coordinator sees it.

use kurbo::{Size, Vec2};

/// Lifecycle phase of a pan gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Not yet recognized.
    #[default]
    Possible,
    /// Just recognized.
    Began,
    /// Moved since the last callback.
    Changed,
    /// Lifted.
    Ended,
    /// Interrupted by the system.
    Cancelled,
    /// Recognition failed.
    Failed,
}

/// The axis a recognizer tracks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureAxis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl GestureAxis {
    /// The component of `v` along this axis.
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// The extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

/// A host pan recognizer, read at each callback.
pub trait PanGesture {
    /// Current phase.
    fn phase(&self) -> GesturePhase;

    /// Size of the view the recognizer is attached to, or `None` if detached.
    fn view_size(&self) -> Option<Size>;

    /// Translation since the gesture began, in points.
    fn translation(&self) -> Vec2;

    /// Current velocity, in points per second.
    fn velocity(&self) -> Vec2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_picks_components() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(GestureAxis::Horizontal.component(v), 3.0);
        assert_eq!(GestureAxis::Vertical.component(v), 4.0);
        let size = Size::new(320.0, 640.0);
        assert_eq!(GestureAxis::Horizontal.extent(size), 320.0);
        assert_eq!(GestureAxis::Vertical.extent(size), 640.0);
    }
}
