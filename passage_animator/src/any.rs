// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The type-erased transition value that navigation hosts store.

use alloc::rc::Rc;
use core::fmt;

use passage_transition::builtin::{self, Axis, FadeStyle};
use passage_transition::{Animation, NavigationTransition, Operation, navigation};

use crate::host::{PropertyAnimator, TransitioningContext};

/// Signature of a primitive transition handler.
pub type PrimitiveFn = dyn Fn(&Rc<dyn PropertyAnimator>, Operation, &Rc<dyn TransitioningContext>);

/// A transition that drives the host animator directly instead of describing
/// surface phases.
///
/// Two primitive transitions are equal only if they share the same handler.
#[derive(Clone)]
pub struct PrimitiveTransition(Rc<PrimitiveFn>);

impl PrimitiveTransition {
    /// Wrap a handler.
    pub fn new(
        f: impl Fn(&Rc<dyn PropertyAnimator>, Operation, &Rc<dyn TransitioningContext>) + 'static,
    ) -> Self {
        Self(Rc::new(f))
    }

    /// Run the handler.
    pub fn call(
        &self,
        animator: &Rc<dyn PropertyAnimator>,
        operation: Operation,
        context: &Rc<dyn TransitioningContext>,
    ) {
        (self.0)(animator, operation, context);
    }
}

impl PartialEq for PrimitiveTransition {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for PrimitiveTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveTransition").finish_non_exhaustive()
    }
}

/// How an [`AnyTransition`] produces its effect.
#[derive(Clone, Debug, PartialEq)]
pub enum Handler {
    /// A declarative tree applied to transient surfaces.
    Declarative(NavigationTransition),
    /// A handler that drives the animator itself.
    Primitive(PrimitiveTransition),
}

/// A stored transition: its handler, its animation, and whether it stands for
/// the host's own default behavior.
///
/// ```
/// use passage_animator::AnyTransition;
/// use passage_transition::Animation;
/// use passage_transition::builtin::{Axis, FadeStyle};
///
/// let t = AnyTransition::slide(Axis::Horizontal)
///     .combined(&AnyTransition::fade(FadeStyle::Cross))
///     .with_animation(Some(Animation::ease_out(0.5)));
/// assert!(!t.is_default());
/// assert_eq!(t.animation(), Some(Animation::ease_out(0.5)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AnyTransition {
    handler: Handler,
    is_default: bool,
    animation: Option<Animation>,
}

impl From<NavigationTransition> for AnyTransition {
    fn from(transition: NavigationTransition) -> Self {
        Self::new(transition)
    }
}

impl AnyTransition {
    /// A declarative transition with the default animation.
    pub fn new(transition: NavigationTransition) -> Self {
        Self {
            handler: Handler::Declarative(transition),
            is_default: false,
            animation: Some(Animation::default()),
        }
    }

    /// A primitive transition with the default animation.
    pub fn primitive(
        f: impl Fn(&Rc<dyn PropertyAnimator>, Operation, &Rc<dyn TransitioningContext>) + 'static,
    ) -> Self {
        Self {
            handler: Handler::Primitive(PrimitiveTransition::new(f)),
            is_default: false,
            animation: Some(Animation::default()),
        }
    }

    /// The host's own transition; installing it restores host behavior.
    pub fn system_default() -> Self {
        Self {
            handler: Handler::Primitive(PrimitiveTransition::new(|_, _, _| {})),
            is_default: true,
            animation: Some(Animation::default()),
        }
    }

    /// See [`builtin::fade`].
    pub fn fade(style: FadeStyle) -> Self {
        Self::new(builtin::fade(style))
    }

    /// See [`builtin::slide`].
    pub fn slide(axis: Axis) -> Self {
        Self::new(builtin::slide(axis))
    }

    /// Replace the animation; `None` makes navigation non-animated.
    #[must_use]
    pub fn with_animation(self, animation: Option<Animation>) -> Self {
        Self { animation, ..self }
    }

    /// The animation, if the transition animates.
    pub fn animation(&self) -> Option<Animation> {
        self.animation
    }

    /// Whether this is [`system_default`](Self::system_default).
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// How this transition produces its effect.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Run `self` then `other` as a single declarative transition.
    ///
    /// The result keeps `self`'s animation and is never the default. Primitive
    /// transitions cannot be combined; if either side is primitive a warning is
    /// logged and `self` is returned unchanged.
    #[must_use]
    pub fn combined(&self, other: &Self) -> Self {
        match (&self.handler, &other.handler) {
            (Handler::Declarative(first), Handler::Declarative(second)) => Self {
                handler: Handler::Declarative(navigation::sequence(first.clone(), second.clone())),
                is_default: false,
                animation: self.animation,
            },
            _ => {
                log::warn!("primitive transitions cannot be combined; keeping the first transition");
                self.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Size;
    use passage_transition::{Container, SurfaceProperties, TransientSurface};

    fn recorder(log: &Rc<RefCell<Vec<u8>>>, tag: u8) -> AnyTransition {
        let log = log.clone();
        AnyTransition::new(navigation::custom(move |_, _, _, _| log.borrow_mut().push(tag)))
    }

    fn run(t: &AnyTransition) {
        let Handler::Declarative(tree) = t.handler() else {
            panic!("expected a declarative transition");
        };
        let mut from = TransientSurface::new(SurfaceProperties::baseline());
        let mut to = TransientSurface::new(SurfaceProperties::baseline());
        tree.apply(
            &mut from,
            &mut to,
            Operation::Push,
            &Container::new(Size::new(10.0, 10.0)),
        );
    }

    #[test]
    fn combine_is_associative() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (recorder(&log, 1), recorder(&log, 2), recorder(&log, 3));

        run(&a.combined(&b).combined(&c));
        let left = core::mem::take(&mut *log.borrow_mut());
        run(&a.combined(&b.combined(&c)));
        let right = core::mem::take(&mut *log.borrow_mut());

        assert_eq!(left, [1, 2, 3]);
        assert_eq!(left, right);
    }

    #[test]
    fn combine_keeps_first_animation() {
        let a = AnyTransition::fade(FadeStyle::Cross).with_animation(Some(Animation::linear(1.0)));
        let b = AnyTransition::slide(Axis::Vertical).with_animation(None);
        assert_eq!(a.combined(&b).animation(), Some(Animation::linear(1.0)));
        assert_eq!(b.combined(&a).animation(), None);
    }

    #[test]
    fn combine_with_primitive_returns_lhs() {
        let declarative = AnyTransition::fade(FadeStyle::In);
        let primitive = AnyTransition::primitive(|_, _, _| {});
        let primitive_before = primitive.clone();

        assert_eq!(declarative.combined(&primitive), declarative);
        assert_eq!(primitive.combined(&declarative), primitive);
        assert_eq!(primitive, primitive_before);
    }

    #[test]
    fn default_is_flagged() {
        assert!(AnyTransition::system_default().is_default());
        assert!(!AnyTransition::fade(FadeStyle::Cross).is_default());
        // The default is primitive, so combining leaves it untouched.
        let combined = AnyTransition::system_default().combined(&AnyTransition::fade(FadeStyle::Cross));
        assert!(combined.is_default());
    }

    #[test]
    fn new_transitions_animate_by_default() {
        assert_eq!(
            AnyTransition::slide(Axis::Horizontal).animation(),
            Some(Animation::default())
        );
    }
}
