// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture schemes and the recognizers that implement them.

use passage_interaction::GestureAxis;
use passage_transition::Edge;

/// How the user can drive a pop with a gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interactivity {
    /// No gesture pops.
    Disabled,
    /// Swipe in from the leading edge.
    #[default]
    EdgePan,
    /// Swipe anywhere on the surface.
    Pan,
    /// Swipe down from the top edge.
    EdgePanVertical,
    /// Swipe down anywhere on the surface.
    PanVertical,
}

impl Interactivity {
    /// Whether progress is tracked top to bottom.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::EdgePanVertical | Self::PanVertical)
    }

    /// The axis custom recognizers track.
    pub fn axis(self) -> GestureAxis {
        if self.is_vertical() {
            GestureAxis::Vertical
        } else {
            GestureAxis::Horizontal
        }
    }

    /// The edge the custom edge recognizer watches.
    pub fn edge(self) -> Edge {
        if self.is_vertical() {
            Edge::Top
        } else {
            Edge::Leading
        }
    }
}

/// The four pan recognizers a navigation controller carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecognizerKind {
    /// The host's own interactive-pop edge recognizer.
    SystemEdgePan,
    /// A full-surface pan that feeds the host's own interactive pop.
    SystemPan,
    /// An edge pan that drives the installed transition.
    EdgePan,
    /// A full-surface pan that drives the installed transition.
    Pan,
}

impl RecognizerKind {
    /// Every kind, in installation order.
    pub const ALL: [Self; 4] = [Self::SystemEdgePan, Self::SystemPan, Self::EdgePan, Self::Pan];

    /// Whether the host owns this recognizer's handling.
    pub fn is_system(self) -> bool {
        matches!(self, Self::SystemEdgePan | Self::SystemPan)
    }
}

/// How a custom recognizer tracks its gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecognizerConfig {
    /// Axis progress is measured along.
    pub axis: GestureAxis,
    /// Screen edge the gesture must start from, for edge recognizers.
    pub edge: Option<Edge>,
}

impl RecognizerConfig {
    /// Configuration of the custom recognizer `kind` under `interactivity`.
    ///
    /// Returns `None` for system recognizers, which are not configurable.
    pub fn for_kind(kind: RecognizerKind, interactivity: Interactivity) -> Option<Self> {
        match kind {
            RecognizerKind::SystemEdgePan | RecognizerKind::SystemPan => None,
            RecognizerKind::EdgePan => Some(Self {
                axis: interactivity.axis(),
                edge: Some(interactivity.edge()),
            }),
            RecognizerKind::Pan => Some(Self {
                axis: interactivity.axis(),
                edge: None,
            }),
        }
    }
}

/// Which single recognizer is enabled.
///
/// ```
/// use passage_navigation::{Interactivity, RecognizerKind, RecognizerSet};
///
/// let set = RecognizerSet::select(Interactivity::Pan, false);
/// assert_eq!(set.enabled(), Some(RecognizerKind::Pan));
/// assert!(!set.is_enabled(RecognizerKind::SystemPan));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RecognizerSet {
    enabled: Option<RecognizerKind>,
}

impl RecognizerSet {
    /// The recognizer to enable for `interactivity`.
    ///
    /// The system recognizers serve the host's default transition; custom
    /// transitions use the custom ones.
    pub fn select(interactivity: Interactivity, is_default: bool) -> Self {
        let enabled = match (interactivity, is_default) {
            (Interactivity::Disabled, _) => None,
            (Interactivity::EdgePan | Interactivity::EdgePanVertical, true) => {
                Some(RecognizerKind::SystemEdgePan)
            }
            (Interactivity::EdgePan | Interactivity::EdgePanVertical, false) => {
                Some(RecognizerKind::EdgePan)
            }
            (Interactivity::Pan | Interactivity::PanVertical, true) => Some(RecognizerKind::SystemPan),
            (Interactivity::Pan | Interactivity::PanVertical, false) => Some(RecognizerKind::Pan),
        };
        Self { enabled }
    }

    /// The enabled recognizer, if any.
    pub fn enabled(&self) -> Option<RecognizerKind> {
        self.enabled
    }

    /// Whether `kind` is the enabled recognizer.
    pub fn is_enabled(&self, kind: RecognizerKind) -> bool {
        self.enabled == Some(kind)
    }
}
