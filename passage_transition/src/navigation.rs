// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation transitions: atomic transitions wired to push or pop, over a pair of surfaces.
//!
//! ## Usage
//!
//! 1) Describe what happens on push with an [`AtomicTransition`].
//! 2) Wrap it with [`mirror_push`] so pop runs the mirrored form and undoes it,
//!    or use [`on_push`] / [`on_pop`] to author each direction by hand.
//! 3) Compose with [`sequence`], [`group`], [`optional`], and [`either`].
//!
//! Within one application both surfaces are visited: the `from` surface plays
//! [`Role::Removal`] and the `to` surface plays [`Role::Insertion`], whatever
//! the operation.
//!
//! ```
//! use kurbo::Size;
//! use passage_transition::atomic::{self, AtomicTransition};
//! use passage_transition::navigation;
//! use passage_transition::{Container, Edge, Operation, SurfaceProperties, TransientSurface};
//!
//! let push = atomic::on_insertion(AtomicTransition::Move(Edge::Trailing));
//! let transition = navigation::mirror_push(push).unwrap();
//!
//! let container = Container::new(Size::new(400.0, 800.0));
//! let mut from = TransientSurface::new(SurfaceProperties::baseline());
//! let mut to = TransientSurface::new(SurfaceProperties::baseline());
//! transition.apply(&mut from, &mut to, Operation::Pop, &container);
//!
//! // On pop the departing surface slides back out to the trailing edge.
//! assert_eq!(from.animation.offset, Some(kurbo::Vec2::new(400.0, 0.0)));
//! assert!(to.animation.is_empty());
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::atomic::{AtomicTransition, Branch};
use crate::operation::{Container, Operation, Role};
use crate::transient::TransientSurface;

/// Error returned when a transition that contains a hand-written leaf is mirrored.
#[derive(Clone, Debug, PartialEq)]
pub struct NotMirrorable {
    /// The transition that could not be mirrored.
    pub transition: AtomicTransition,
}

impl fmt::Display for NotMirrorable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transition contains a custom leaf and cannot be mirrored: {:?}",
            self.transition
        )
    }
}

impl core::error::Error for NotMirrorable {}

/// Signature of a hand-written navigation transition.
pub type NavigationFn = dyn Fn(&mut TransientSurface, &mut TransientSurface, Operation, &Container);

/// A hand-written navigation transition over both surfaces.
///
/// It is still declarative: it only writes into the transient surfaces.
#[derive(Clone)]
pub struct CustomNavigation(Rc<NavigationFn>);

impl CustomNavigation {
    /// Wrap a closure.
    pub fn new(
        f: impl Fn(&mut TransientSurface, &mut TransientSurface, Operation, &Container) + 'static,
    ) -> Self {
        Self(Rc::new(f))
    }
}

impl PartialEq for CustomNavigation {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomNavigation").finish_non_exhaustive()
    }
}

/// A composable transition over the `from` and `to` surfaces of a navigation operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum NavigationTransition {
    /// Does nothing.
    #[default]
    Identity,
    /// Runs the atomic transition on push only.
    OnPush(AtomicTransition),
    /// Runs the atomic transition on pop only.
    OnPop(AtomicTransition),
    /// Runs the first child, then the second.
    Sequence(Box<Self>, Box<Self>),
    /// Runs each child in order.
    Group(Vec<Self>),
    /// Runs the child if present.
    Optional(Option<Box<Self>>),
    /// Runs whichever alternative was chosen at construction.
    Conditional(Branch<Box<Self>>),
    /// A hand-written transition.
    Custom(CustomNavigation),
}

impl NavigationTransition {
    /// Apply this transition to the surface pair for `operation`.
    pub fn apply(
        &self,
        from: &mut TransientSurface,
        to: &mut TransientSurface,
        operation: Operation,
        container: &Container,
    ) {
        match self {
            Self::Identity => {}
            Self::OnPush(atomic) => {
                if operation == Operation::Push {
                    apply_pair(atomic, from, to, container);
                }
            }
            Self::OnPop(atomic) => {
                if operation == Operation::Pop {
                    apply_pair(atomic, from, to, container);
                }
            }
            Self::Sequence(first, second) => {
                first.apply(from, to, operation, container);
                second.apply(from, to, operation, container);
            }
            Self::Group(children) => {
                for child in children {
                    child.apply(from, to, operation, container);
                }
            }
            Self::Optional(child) => {
                if let Some(child) = child {
                    child.apply(from, to, operation, container);
                }
            }
            Self::Conditional(branch) => branch.get().apply(from, to, operation, container),
            Self::Custom(custom) => (custom.0)(from, to, operation, container),
        }
    }

    /// Sequence `self` before `next`.
    pub fn then(self, next: Self) -> Self {
        sequence(self, next)
    }
}

fn apply_pair(
    atomic: &AtomicTransition,
    from: &mut TransientSurface,
    to: &mut TransientSurface,
    container: &Container,
) {
    atomic.apply(from, Role::Removal, container);
    atomic.apply(to, Role::Insertion, container);
}

/// The no-op transition.
pub fn identity() -> NavigationTransition {
    NavigationTransition::Identity
}

/// Run `transition` on push only.
pub fn on_push(transition: AtomicTransition) -> NavigationTransition {
    NavigationTransition::OnPush(transition)
}

/// Run `transition` on pop only.
pub fn on_pop(transition: AtomicTransition) -> NavigationTransition {
    NavigationTransition::OnPop(transition)
}

/// Run `transition` on push and its mirrored form on pop.
///
/// Pop then undoes what push did.
pub fn mirror_push(transition: AtomicTransition) -> Result<NavigationTransition, NotMirrorable> {
    let Some(mirrored) = transition.mirrored() else {
        return Err(NotMirrorable { transition });
    };
    Ok(sequence(on_push(transition), on_pop(mirrored)))
}

/// Run `transition` on pop and its mirrored form on push.
pub fn mirror_pop(transition: AtomicTransition) -> Result<NavigationTransition, NotMirrorable> {
    let Some(mirrored) = transition.mirrored() else {
        return Err(NotMirrorable { transition });
    };
    Ok(sequence(on_push(mirrored), on_pop(transition)))
}

/// Apply `first`, then `second`.
pub fn sequence(first: NavigationTransition, second: NavigationTransition) -> NavigationTransition {
    NavigationTransition::Sequence(Box::new(first), Box::new(second))
}

/// Apply every transition in order; an empty group is [`identity`].
pub fn group(transitions: impl IntoIterator<Item = NavigationTransition>) -> NavigationTransition {
    let children: Vec<_> = transitions.into_iter().collect();
    if children.is_empty() {
        NavigationTransition::Identity
    } else {
        NavigationTransition::Group(children)
    }
}

/// Apply `transition` if there is one.
pub fn optional(transition: Option<NavigationTransition>) -> NavigationTransition {
    NavigationTransition::Optional(transition.map(Box::new))
}

/// Pick `first` when `condition` holds, otherwise `second`.
pub fn either(
    condition: bool,
    first: NavigationTransition,
    second: NavigationTransition,
) -> NavigationTransition {
    NavigationTransition::Conditional(if condition {
        Branch::First(Box::new(first))
    } else {
        Branch::Second(Box::new(second))
    })
}

/// Wrap a hand-written transition.
pub fn custom(
    f: impl Fn(&mut TransientSurface, &mut TransientSurface, Operation, &Container) + 'static,
) -> NavigationTransition {
    NavigationTransition::Custom(CustomNavigation::new(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atomic;
    use crate::operation::Edge;
    use crate::properties::{PropertyKind, PropertyValue, SurfaceProperties};
    use crate::surface::Surface;
    use crate::surface::tests::RecordingSurface;
    use crate::transient::Phase;
    use alloc::vec;
    use core::cell::RefCell;
    use kurbo::{Size, Vec2};

    fn container() -> Container {
        Container::new(Size::new(320.0, 480.0))
    }

    fn fresh() -> TransientSurface {
        TransientSurface::new(SurfaceProperties::baseline())
    }

    /// Run one operation the way the animator bridge does when it is not cancelled.
    fn run(
        transition: &NavigationTransition,
        operation: Operation,
        from: &RecordingSurface,
        to: &RecordingSurface,
    ) -> (TransientSurface, TransientSurface) {
        let mut from_view = TransientSurface::capture(from);
        let mut to_view = TransientSurface::capture(to);
        transition.apply(&mut from_view, &mut to_view, operation, &container());
        for phase in [Phase::Initial, Phase::Animation, Phase::Completion] {
            from_view.apply_phase(phase, from);
            to_view.apply_phase(phase, to);
        }
        (from_view, to_view)
    }

    #[test]
    fn on_push_only_fires_on_push() {
        let t = on_push(AtomicTransition::Opacity);
        let (mut from, mut to) = (fresh(), fresh());
        t.apply(&mut from, &mut to, Operation::Pop, &container());
        assert!(from.animation.is_empty());
        assert!(to.initial.is_empty());

        t.apply(&mut from, &mut to, Operation::Push, &container());
        assert_eq!(from.animation.opacity, Some(0.0));
        assert_eq!(to.initial.opacity, Some(0.0));
    }

    #[test]
    fn on_pop_only_fires_on_pop() {
        let t = on_pop(atomic::on_removal(AtomicTransition::Scale(0.5)));
        let (mut from, mut to) = (fresh(), fresh());
        t.apply(&mut from, &mut to, Operation::Push, &container());
        assert!(from.animation.is_empty());

        t.apply(&mut from, &mut to, Operation::Pop, &container());
        assert_eq!(from.animation.scale, Some(Vec2::new(0.5, 0.5)));
        assert!(to.animation.is_empty());
    }

    #[test]
    fn mirror_push_pop_moves_the_departing_surface_back() {
        let t = mirror_push(atomic::group([
            atomic::on_insertion(AtomicTransition::Move(Edge::Trailing)),
            atomic::on_removal(AtomicTransition::Move(Edge::Leading)),
        ]))
        .unwrap();

        let (mut from, mut to) = (fresh(), fresh());
        t.apply(&mut from, &mut to, Operation::Pop, &container());
        // The surface leaving on pop exits towards the trailing edge it came from.
        assert_eq!(from.animation.offset, Some(Vec2::new(320.0, 0.0)));
        // The surface revealed on pop returns from the leading edge.
        assert_eq!(to.initial.offset, Some(Vec2::new(-320.0, 0.0)));
        assert_eq!(to.animation.offset, Some(Vec2::ZERO));
    }

    #[test]
    fn push_then_pop_round_trips_to_baseline() {
        let t = mirror_push(atomic::group([
            atomic::on_insertion(atomic::group([
                AtomicTransition::Move(Edge::Bottom),
                AtomicTransition::Opacity,
                atomic::bring_to_front(),
            ])),
            atomic::on_removal(atomic::sequence(
                AtomicTransition::Scale(0.9),
                AtomicTransition::CornerRadius(24.0),
            )),
        ]))
        .unwrap();

        let root = RecordingSurface::default();
        let pushed = RecordingSurface::default();

        let (push_from, push_to) = run(&t, Operation::Push, &root, &pushed);
        // Pop runs on swapped surfaces: the pushed surface is now leaving.
        let (pop_from, pop_to) = run(&t, Operation::Pop, &pushed, &root);

        // Pop animates towards where push started.
        assert_eq!(pop_from.animation.offset, push_to.initial.offset);
        assert_eq!(pop_from.animation.opacity, push_to.initial.opacity);
        assert_eq!(pop_to.initial.scale, push_from.animation.scale);

        for kind in PropertyKind::ALL {
            assert_eq!(root.property(kind), PropertyValue::baseline(kind));
            assert_eq!(pushed.property(kind), PropertyValue::baseline(kind));
        }
    }

    #[test]
    fn mirror_rejects_custom_leaves() {
        let leaf = atomic::custom(|_, _, _| {});
        let err = mirror_push(leaf.clone()).unwrap_err();
        assert_eq!(err.transition, leaf);
        assert!(mirror_pop(leaf).is_err());
    }

    #[test]
    fn mirror_pop_is_mirror_push_reversed() {
        let leaf = atomic::on_insertion(AtomicTransition::Opacity);
        let t = mirror_pop(leaf.clone()).unwrap();
        assert_eq!(
            t,
            sequence(on_push(leaf.mirrored().unwrap()), on_pop(leaf))
        );
    }

    #[test]
    fn composition_runs_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let record = |tag: u8| {
            let log = log.clone();
            custom(move |_, _, _, _| log.borrow_mut().push(tag))
        };
        let t = group([
            record(1),
            optional(Some(record(2))),
            optional(None),
            either(false, record(8), record(3)),
        ])
        .then(record(4));

        let (mut from, mut to) = (fresh(), fresh());
        t.apply(&mut from, &mut to, Operation::Push, &container());
        assert_eq!(*log.borrow(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn custom_sees_operation() {
        let t = custom(|from, _, operation, _| {
            if operation == Operation::Pop {
                from.completion.set(PropertyValue::Hidden(true));
            }
        });
        let (mut from, mut to) = (fresh(), fresh());
        t.apply(&mut from, &mut to, Operation::Pop, &container());
        assert_eq!(from.completion.hidden, Some(true));
    }
}
