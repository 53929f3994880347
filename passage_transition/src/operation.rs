// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operations, roles, and the geometry shared by every transition in one run.

use kurbo::{Size, Vec2};

/// A navigation-stack mutation being animated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A new entry is placed on top of the stack.
    Push,
    /// The top entry is removed from the stack.
    Pop,
}

/// Which side of a transition a surface is on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The surface is appearing.
    Insertion,
    /// The surface is disappearing.
    Removal,
}

/// An edge of the container, used by edge-relative moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The leading (left, in left-to-right layouts) edge.
    Leading,
    /// The trailing (right, in left-to-right layouts) edge.
    Trailing,
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
}

impl Edge {
    /// The translation that places a surface of the container's size just past this edge.
    pub fn offset(self, size: Size) -> Vec2 {
        match self {
            Self::Leading => Vec2::new(-size.width, 0.0),
            Self::Trailing => Vec2::new(size.width, 0.0),
            Self::Top => Vec2::new(0.0, -size.height),
            Self::Bottom => Vec2::new(0.0, size.height),
        }
    }
}

/// Geometry of the container both surfaces are animated in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Container {
    /// Size of the container's bounds.
    pub size: Size,
}

impl Container {
    /// Describe a container of the given size.
    pub const fn new(size: Size) -> Self {
        Self { size }
    }
}
