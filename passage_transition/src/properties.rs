// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animatable surface properties and the partial snapshots transitions write into.
//!
//! A [`SurfaceProperties`] value is a sparse mapping from [`PropertyKind`] to
//! [`PropertyValue`]. Transitions only record the kinds they care about; every
//! other kind stays at whatever the live surface already shows.
//!
//! ```
//! use kurbo::Vec2;
//! use passage_transition::{PropertyKind, PropertyValue, SurfaceProperties};
//!
//! let mut props = SurfaceProperties::new();
//! props.opacity = Some(0.0);
//! props.set(PropertyValue::Offset(Vec2::new(320.0, 0.0)));
//!
//! assert_eq!(props.get(PropertyKind::Opacity), Some(PropertyValue::Opacity(0.0)));
//! assert_eq!(props.get(PropertyKind::Scale), None);
//! assert_eq!(props.values().len(), 2);
//! ```

use kurbo::Vec2;
use smallvec::SmallVec;

use crate::surface::Surface;

/// A kind of animatable surface property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Translation relative to the surface's laid-out position.
    Offset,
    /// Alpha in `0.0..=1.0`.
    Opacity,
    /// Per-axis scale factors.
    Scale,
    /// Corner rounding radius.
    CornerRadius,
    /// Stacking order within the container. Higher is drawn on top.
    ZPosition,
    /// Whether the surface is hidden.
    Hidden,
}

impl PropertyKind {
    /// Every tracked kind, in a stable order.
    pub const ALL: [Self; 6] = [
        Self::Offset,
        Self::Opacity,
        Self::Scale,
        Self::CornerRadius,
        Self::ZPosition,
        Self::Hidden,
    ];
}

/// A concrete value for one [`PropertyKind`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// See [`PropertyKind::Offset`].
    Offset(Vec2),
    /// See [`PropertyKind::Opacity`].
    Opacity(f64),
    /// See [`PropertyKind::Scale`].
    Scale(Vec2),
    /// See [`PropertyKind::CornerRadius`].
    CornerRadius(f64),
    /// See [`PropertyKind::ZPosition`].
    ZPosition(f64),
    /// See [`PropertyKind::Hidden`].
    Hidden(bool),
}

impl PropertyValue {
    /// The kind this value belongs to.
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Offset(_) => PropertyKind::Offset,
            Self::Opacity(_) => PropertyKind::Opacity,
            Self::Scale(_) => PropertyKind::Scale,
            Self::CornerRadius(_) => PropertyKind::CornerRadius,
            Self::ZPosition(_) => PropertyKind::ZPosition,
            Self::Hidden(_) => PropertyKind::Hidden,
        }
    }

    /// The resting value of `kind` on a surface nobody has touched.
    pub const fn baseline(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Offset => Self::Offset(Vec2::ZERO),
            PropertyKind::Opacity => Self::Opacity(1.0),
            PropertyKind::Scale => Self::Scale(Vec2::new(1.0, 1.0)),
            PropertyKind::CornerRadius => Self::CornerRadius(0.0),
            PropertyKind::ZPosition => Self::ZPosition(0.0),
            PropertyKind::Hidden => Self::Hidden(false),
        }
    }
}

/// A partial snapshot of surface properties for one transition phase.
///
/// Unset fields mean "leave the surface alone". Writing a kind twice keeps the
/// last write, which is what gives sequenced transitions their override order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceProperties {
    /// Translation, if set.
    pub offset: Option<Vec2>,
    /// Alpha, if set.
    pub opacity: Option<f64>,
    /// Scale factors, if set.
    pub scale: Option<Vec2>,
    /// Corner radius, if set.
    pub corner_radius: Option<f64>,
    /// Stacking order, if set.
    pub z_position: Option<f64>,
    /// Hidden flag, if set.
    pub hidden: Option<bool>,
}

impl SurfaceProperties {
    /// An empty snapshot.
    pub const fn new() -> Self {
        Self {
            offset: None,
            opacity: None,
            scale: None,
            corner_radius: None,
            z_position: None,
            hidden: None,
        }
    }

    /// A snapshot holding the baseline of every tracked kind.
    pub fn baseline() -> Self {
        let mut props = Self::new();
        for kind in PropertyKind::ALL {
            props.set(PropertyValue::baseline(kind));
        }
        props
    }

    /// Read one kind, if present.
    pub fn get(&self, kind: PropertyKind) -> Option<PropertyValue> {
        match kind {
            PropertyKind::Offset => self.offset.map(PropertyValue::Offset),
            PropertyKind::Opacity => self.opacity.map(PropertyValue::Opacity),
            PropertyKind::Scale => self.scale.map(PropertyValue::Scale),
            PropertyKind::CornerRadius => self.corner_radius.map(PropertyValue::CornerRadius),
            PropertyKind::ZPosition => self.z_position.map(PropertyValue::ZPosition),
            PropertyKind::Hidden => self.hidden.map(PropertyValue::Hidden),
        }
    }

    /// Record a value, replacing any earlier value of the same kind.
    pub fn set(&mut self, value: PropertyValue) {
        match value {
            PropertyValue::Offset(v) => self.offset = Some(v),
            PropertyValue::Opacity(v) => self.opacity = Some(v),
            PropertyValue::Scale(v) => self.scale = Some(v),
            PropertyValue::CornerRadius(v) => self.corner_radius = Some(v),
            PropertyValue::ZPosition(v) => self.z_position = Some(v),
            PropertyValue::Hidden(v) => self.hidden = Some(v),
        }
    }

    /// Returns `true` if no kind is set.
    pub fn is_empty(&self) -> bool {
        PropertyKind::ALL.iter().all(|&kind| self.get(kind).is_none())
    }

    /// The present values, in [`PropertyKind::ALL`] order.
    pub fn values(&self) -> SmallVec<[PropertyValue; 6]> {
        PropertyKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind))
            .collect()
    }

    /// Write the present values to `surface`, leaving every other kind untouched.
    pub fn apply(&self, surface: &dyn Surface) {
        for value in self.values() {
            surface.set_property(value);
        }
    }

    /// Write the baseline of every tracked kind to `surface`, regardless of
    /// what any phase recorded.
    pub fn reset(surface: &dyn Surface) {
        for kind in PropertyKind::ALL {
            surface.set_property(PropertyValue::baseline(kind));
        }
    }
}
