// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made transitions.

use crate::atomic::{self, AtomicTransition};
use crate::navigation::{self, NavigationTransition};
use crate::operation::Edge;

/// What a [`fade`] fades.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FadeStyle {
    /// Fade the pushed surface in over the other, and out again on pop.
    In,
    /// Fade the covered surface out from above the other, and back in on pop.
    Out,
    /// Cross-fade both surfaces.
    Cross,
}

/// Axis of a [`slide`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Push right-to-left, pop left-to-right.
    Horizontal,
    /// Push bottom-to-top, pop top-to-bottom.
    Vertical,
}

/// Fades the pushed surface in, the popped surface out, or cross-fades both.
pub fn fade(style: FadeStyle) -> NavigationTransition {
    let push = match style {
        FadeStyle::In => atomic::on_insertion(raised_fade()),
        FadeStyle::Out => atomic::on_removal(raised_fade()),
        FadeStyle::Cross => AtomicTransition::Opacity,
    };
    mirrored(push)
}

/// Moves both surfaces in and out along `axis`.
pub fn slide(axis: Axis) -> NavigationTransition {
    let (enter, exit) = match axis {
        Axis::Horizontal => (Edge::Trailing, Edge::Leading),
        Axis::Vertical => (Edge::Bottom, Edge::Top),
    };
    mirrored(atomic::sequence(
        atomic::on_insertion(AtomicTransition::Move(enter)),
        atomic::on_removal(AtomicTransition::Move(exit)),
    ))
}

fn raised_fade() -> AtomicTransition {
    atomic::sequence(atomic::bring_to_front(), AtomicTransition::Opacity)
}

/// Built-ins contain no custom leaves, so mirroring cannot fail; identity is
/// the fallback should that ever change.
fn mirrored(push: AtomicTransition) -> NavigationTransition {
    navigation::mirror_push(push).unwrap_or_default()
}
