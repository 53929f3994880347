// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient property containers: the three-phase scratch space a transition writes into.
//!
//! ## Phases
//!
//! - [`TransientSurface::initial`] is applied immediately, before the animation starts.
//! - [`TransientSurface::animation`] is the target handed to the host animator.
//! - [`TransientSurface::completion`] is applied, unanimated, once the animation finishes.
//!
//! Transitions never touch the live surface. They compound their writes into
//! these phases, and the animator bridge submits the result in one go.
//!
//! ```
//! use passage_transition::{PropertyKind, PropertyValue, SurfaceProperties, TransientSurface};
//!
//! let mut view = TransientSurface::new(SurfaceProperties::baseline());
//! view.initial.opacity = Some(0.0);
//! view.animation.opacity = Some(1.0);
//!
//! // The live values are read back through `get`.
//! assert_eq!(view.get(PropertyKind::Opacity), PropertyValue::Opacity(1.0));
//! ```

use crate::properties::{PropertyKind, PropertyValue, SurfaceProperties};
use crate::surface::Surface;

/// Selects one of the three phases of a [`TransientSurface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Applied before the animation starts.
    Initial,
    /// Submitted to the host animator as the animation target.
    Animation,
    /// Applied after the animation finishes.
    Completion,
}

/// A per-surface property container for one transition execution.
#[derive(Clone, Debug, PartialEq)]
pub struct TransientSurface {
    /// Values that establish the starting point of the animation.
    pub initial: SurfaceProperties,
    /// Values the host animator animates towards.
    pub animation: SurfaceProperties,
    /// Values applied once the animation has finished.
    ///
    /// These are not animated.
    pub completion: SurfaceProperties,
    live: SurfaceProperties,
}

impl TransientSurface {
    /// Create a container whose read accessor reports `live`.
    ///
    /// `live` should be a full snapshot; kinds missing from it read as baseline.
    pub fn new(live: SurfaceProperties) -> Self {
        Self {
            initial: SurfaceProperties::new(),
            animation: SurfaceProperties::new(),
            completion: SurfaceProperties::new(),
            live,
        }
    }

    /// Snapshot the current values of a host surface.
    pub fn capture(surface: &dyn Surface) -> Self {
        let mut live = SurfaceProperties::new();
        for kind in PropertyKind::ALL {
            live.set(surface.property(kind));
        }
        Self::new(live)
    }

    /// Read the value the surface had when this container was created.
    pub fn get(&self, kind: PropertyKind) -> PropertyValue {
        self.live
            .get(kind)
            .unwrap_or(PropertyValue::baseline(kind))
    }

    /// Borrow one phase.
    pub fn phase(&self, phase: Phase) -> &SurfaceProperties {
        match phase {
            Phase::Initial => &self.initial,
            Phase::Animation => &self.animation,
            Phase::Completion => &self.completion,
        }
    }

    /// Write one phase to `surface`.
    pub fn apply_phase(&self, phase: Phase, surface: &dyn Surface) {
        self.phase(phase).apply(surface);
    }
}
