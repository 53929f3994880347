// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host surface seam.

use crate::properties::{PropertyKind, PropertyValue};

/// A host surface taking part in a transition (for example a platform view).
///
/// Host surfaces are shared references owned by the host's view hierarchy, so
/// every method takes `&self`; implementations use interior mutability.
pub trait Surface {
    /// Read the surface's current value for `kind`.
    fn property(&self, kind: PropertyKind) -> PropertyValue;

    /// Write one property value to the surface.
    fn set_property(&self, value: PropertyValue);

    /// Enable or disable user interaction on the surface.
    fn set_interaction_enabled(&self, enabled: bool);
}
