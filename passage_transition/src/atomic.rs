// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atomic transitions: single-surface property mutators and their composition algebra.
//!
//! An [`AtomicTransition`] is an immutable tree. Leaves write into one phase or
//! more of a [`TransientSurface`]; composite nodes decide which leaves run and in
//! what order. Applying a tree is pure with respect to everything outside the
//! transient surface it is given.
//!
//! ## Roles
//!
//! Every leaf is role-aware. On [`Role::Insertion`] it sets up its effect in the
//! `initial` phase and animates back to baseline. On [`Role::Removal`] it
//! animates away from baseline and restores baseline in `completion`. The two
//! are inverse, so mirroring a leaf yields the leaf itself; the interesting part
//! of mirroring is swapping [`AtomicTransition::OnInsertion`] and
//! [`AtomicTransition::OnRemoval`].
//!
//! ## Composition
//!
//! - [`sequence`] / [`AtomicTransition::then`]: apply one, then the other. Later writes win.
//! - [`group`]: apply any number in order. An empty group is [`identity`].
//! - [`optional`]: apply a transition only if one was given.
//! - [`either`]: pick one of two transitions when the tree is built.
//! - [`on_insertion`] / [`on_removal`]: restrict a transition to one role.
//!
//! ```
//! use kurbo::Size;
//! use passage_transition::atomic::{self, AtomicTransition};
//! use passage_transition::{Container, Edge, Role, SurfaceProperties, TransientSurface};
//!
//! let slide_in = atomic::on_insertion(AtomicTransition::Move(Edge::Trailing))
//!     .then(AtomicTransition::Opacity);
//!
//! let container = Container::new(Size::new(400.0, 800.0));
//! let mut view = TransientSurface::new(SurfaceProperties::baseline());
//! slide_in.apply(&mut view, Role::Insertion, &container);
//!
//! assert_eq!(view.initial.offset, Some(kurbo::Vec2::new(400.0, 0.0)));
//! assert_eq!(view.initial.opacity, Some(0.0));
//! assert_eq!(view.animation.opacity, Some(1.0));
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Vec2;

use crate::operation::{Container, Edge, Role};
use crate::properties::{PropertyKind, PropertyValue};
use crate::transient::TransientSurface;

/// Signature of a hand-written atomic transition.
pub type AtomicFn = dyn Fn(&mut TransientSurface, Role, &Container);

/// A hand-written atomic transition.
///
/// Custom transitions cannot be mirrored, and any tree that contains one is not
/// mirrorable either. Two custom transitions compare equal only if they share
/// the same closure.
#[derive(Clone)]
pub struct CustomAtomic(Rc<AtomicFn>);

impl CustomAtomic {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&mut TransientSurface, Role, &Container) + 'static) -> Self {
        Self(Rc::new(f))
    }

    fn call(&self, view: &mut TransientSurface, role: Role, container: &Container) {
        (self.0)(view, role, container);
    }
}

impl PartialEq for CustomAtomic {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomAtomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomAtomic").finish_non_exhaustive()
    }
}

/// One of two alternatives, chosen when a tree is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Branch<T> {
    /// The alternative picked when the condition held.
    First(T),
    /// The alternative picked when the condition did not hold.
    Second(T),
}

impl<T> Branch<T> {
    /// Borrow the chosen alternative.
    pub fn get(&self) -> &T {
        match self {
            Self::First(t) | Self::Second(t) => t,
        }
    }

    /// Map the chosen alternative, keeping which side it was on.
    pub fn try_map<U>(&self, f: impl FnOnce(&T) -> Option<U>) -> Option<Branch<U>> {
        Some(match self {
            Self::First(t) => Branch::First(f(t)?),
            Self::Second(t) => Branch::Second(f(t)?),
        })
    }
}

/// A composable transition over a single surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AtomicTransition {
    /// Does nothing.
    #[default]
    Identity,
    /// Moves the surface in from, or out to, an edge of the container.
    Move(Edge),
    /// Moves the surface in from, or out to, a fixed translation.
    Offset(Vec2),
    /// Fades the surface in or out.
    Opacity,
    /// Scales the surface up from, or down to, a uniform factor.
    Scale(f64),
    /// Rounds the surface's corners while it is off-screen.
    CornerRadius(f64),
    /// Places the surface at a stacking depth for the duration of the animation.
    ZPosition(f64),
    /// Runs the child only when the surface is being inserted.
    OnInsertion(Box<Self>),
    /// Runs the child only when the surface is being removed.
    OnRemoval(Box<Self>),
    /// Runs the first child, then the second.
    Sequence(Box<Self>, Box<Self>),
    /// Runs each child in order.
    Group(Vec<Self>),
    /// Runs the child if present.
    Optional(Option<Box<Self>>),
    /// Runs whichever alternative was chosen at construction.
    Conditional(Branch<Box<Self>>),
    /// A hand-written transition.
    Custom(CustomAtomic),
}

impl AtomicTransition {
    /// Apply this transition to `view` playing `role`.
    pub fn apply(&self, view: &mut TransientSurface, role: Role, container: &Container) {
        match self {
            Self::Identity => {}
            Self::Move(edge) => {
                transit(view, role, PropertyValue::Offset(edge.offset(container.size)));
            }
            Self::Offset(offset) => transit(view, role, PropertyValue::Offset(*offset)),
            Self::Opacity => transit(view, role, PropertyValue::Opacity(0.0)),
            Self::Scale(factor) => {
                transit(view, role, PropertyValue::Scale(Vec2::new(*factor, *factor)));
            }
            Self::CornerRadius(radius) => transit(view, role, PropertyValue::CornerRadius(*radius)),
            Self::ZPosition(z) => {
                view.initial.set(PropertyValue::ZPosition(*z));
                view.animation.set(PropertyValue::ZPosition(*z));
                view.completion
                    .set(PropertyValue::baseline(PropertyKind::ZPosition));
            }
            Self::OnInsertion(child) => {
                if role == Role::Insertion {
                    child.apply(view, role, container);
                }
            }
            Self::OnRemoval(child) => {
                if role == Role::Removal {
                    child.apply(view, role, container);
                }
            }
            Self::Sequence(first, second) => {
                first.apply(view, role, container);
                second.apply(view, role, container);
            }
            Self::Group(children) => {
                for child in children {
                    child.apply(view, role, container);
                }
            }
            Self::Optional(child) => {
                if let Some(child) = child {
                    child.apply(view, role, container);
                }
            }
            Self::Conditional(branch) => branch.get().apply(view, role, container),
            Self::Custom(custom) => custom.call(view, role, container),
        }
    }

    /// Derive the transition with the opposite navigational direction.
    ///
    /// Returns `None` if the tree contains a [`AtomicTransition::Custom`] leaf.
    pub fn mirrored(&self) -> Option<Self> {
        Some(match self {
            Self::Identity
            | Self::Move(_)
            | Self::Offset(_)
            | Self::Opacity
            | Self::Scale(_)
            | Self::CornerRadius(_)
            | Self::ZPosition(_) => self.clone(),
            Self::OnInsertion(child) => Self::OnRemoval(Box::new(child.mirrored()?)),
            Self::OnRemoval(child) => Self::OnInsertion(Box::new(child.mirrored()?)),
            Self::Sequence(first, second) => {
                Self::Sequence(Box::new(first.mirrored()?), Box::new(second.mirrored()?))
            }
            Self::Group(children) => {
                Self::Group(children.iter().map(Self::mirrored).collect::<Option<_>>()?)
            }
            Self::Optional(child) => match child {
                Some(child) => Self::Optional(Some(Box::new(child.mirrored()?))),
                None => Self::Optional(None),
            },
            Self::Conditional(branch) => {
                Self::Conditional(branch.try_map(|child| child.mirrored().map(Box::new))?)
            }
            Self::Custom(_) => return None,
        })
    }

    /// Returns `true` if [`mirrored`](Self::mirrored) would succeed.
    pub fn is_mirrorable(&self) -> bool {
        match self {
            Self::Custom(_) => false,
            Self::OnInsertion(child) | Self::OnRemoval(child) => child.is_mirrorable(),
            Self::Sequence(first, second) => first.is_mirrorable() && second.is_mirrorable(),
            Self::Group(children) => children.iter().all(Self::is_mirrorable),
            Self::Optional(child) => child.as_ref().is_none_or(|child| child.is_mirrorable()),
            Self::Conditional(branch) => branch.get().is_mirrorable(),
            _ => true,
        }
    }

    /// Sequence `self` before `next`.
    pub fn then(self, next: Self) -> Self {
        sequence(self, next)
    }
}

/// Insertion starts at `away` and animates to baseline; removal animates to `away`
/// and snaps back to baseline once hidden.
fn transit(view: &mut TransientSurface, role: Role, away: PropertyValue) {
    let rest = PropertyValue::baseline(away.kind());
    match role {
        Role::Insertion => {
            view.initial.set(away);
            view.animation.set(rest);
            view.completion.set(rest);
        }
        Role::Removal => {
            view.animation.set(away);
            view.completion.set(rest);
        }
    }
}

/// The no-op transition.
pub fn identity() -> AtomicTransition {
    AtomicTransition::Identity
}

/// Apply `first`, then `second`.
pub fn sequence(first: AtomicTransition, second: AtomicTransition) -> AtomicTransition {
    AtomicTransition::Sequence(Box::new(first), Box::new(second))
}

/// Apply every transition in order; an empty group is [`identity`].
pub fn group(transitions: impl IntoIterator<Item = AtomicTransition>) -> AtomicTransition {
    let children: Vec<_> = transitions.into_iter().collect();
    if children.is_empty() {
        AtomicTransition::Identity
    } else {
        AtomicTransition::Group(children)
    }
}

/// Apply `transition` if there is one.
pub fn optional(transition: Option<AtomicTransition>) -> AtomicTransition {
    AtomicTransition::Optional(transition.map(Box::new))
}

/// Pick `first` when `condition` holds, otherwise `second`.
pub fn either(
    condition: bool,
    first: AtomicTransition,
    second: AtomicTransition,
) -> AtomicTransition {
    AtomicTransition::Conditional(if condition {
        Branch::First(Box::new(first))
    } else {
        Branch::Second(Box::new(second))
    })
}

/// Restrict `transition` to the inserted surface.
pub fn on_insertion(transition: AtomicTransition) -> AtomicTransition {
    AtomicTransition::OnInsertion(Box::new(transition))
}

/// Restrict `transition` to the removed surface.
pub fn on_removal(transition: AtomicTransition) -> AtomicTransition {
    AtomicTransition::OnRemoval(Box::new(transition))
}

/// Raise the surface above its sibling while animating.
pub fn bring_to_front() -> AtomicTransition {
    AtomicTransition::ZPosition(1.0)
}

/// Lower the surface below its sibling while animating.
pub fn send_to_back() -> AtomicTransition {
    AtomicTransition::ZPosition(-1.0)
}

/// Wrap a hand-written transition.
pub fn custom(f: impl Fn(&mut TransientSurface, Role, &Container) + 'static) -> AtomicTransition {
    AtomicTransition::Custom(CustomAtomic::new(f))
}
