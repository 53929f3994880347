// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side seams the bridge drives.
//!
//! The host owns the real view hierarchy, the navigation transition context,
//! and the animator. These traits are the only way the bridge touches them.
//! All methods take `&self`; hosts are single-threaded and use interior
//! mutability.

use alloc::boxed::Box;
use alloc::rc::Rc;

use kurbo::Size;
use passage_transition::{Animation, Surface};

/// Shared handle to a host surface.
pub type SurfaceRef = Rc<dyn Surface>;

/// Identity of one host transition context.
///
/// Animators are cached per context, so two calls for the same context must
/// report the same id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(pub u64);

/// Which of the two surfaces taking part in a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKey {
    /// The surface being navigated away from.
    From,
    /// The surface being navigated to.
    To,
}

/// Where a host animator stopped when its completions run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimatingPosition {
    /// At the end values.
    End,
    /// Back at the start values.
    Start,
    /// Somewhere in between.
    Current,
}

/// The view that hosts both surfaces while a transition runs.
pub trait ContainerView {
    /// Current size of the container.
    fn size(&self) -> Size;

    /// Insert `surface` directly above `sibling`.
    fn insert_above(&self, surface: &SurfaceRef, sibling: &SurfaceRef);

    /// Insert `surface` directly below `sibling`.
    fn insert_below(&self, surface: &SurfaceRef, sibling: &SurfaceRef);

    /// Remove `surface` from the container if it is a child.
    fn remove(&self, surface: &SurfaceRef);

    /// Append `surface` as the top-most child.
    fn add(&self, surface: &SurfaceRef);
}

/// The host's description of one in-flight navigation transition.
pub trait TransitioningContext {
    /// Stable identity of this context.
    fn id(&self) -> ContextId;

    /// The container both surfaces live in.
    fn container(&self) -> Rc<dyn ContainerView>;

    /// The `from` or `to` surface, if the host can provide it.
    fn surface(&self, key: SurfaceKey) -> Option<SurfaceRef>;

    /// Whether the transition was cancelled, for example by an abandoned
    /// interactive gesture.
    fn was_cancelled(&self) -> bool;

    /// Tell the host the transition finished; `completed` is false when it
    /// was cancelled.
    fn complete_transition(&self, completed: bool);
}

/// An interruptible animator owned by the host.
///
/// Animation blocks set end values that the host interpolates toward;
/// completion blocks run once, in registration order, when the animator stops.
pub trait PropertyAnimator {
    /// Register a block of property writes to animate.
    fn add_animations(&self, animations: Box<dyn FnOnce()>);

    /// Register a block to run when the animator stops.
    fn add_completion(&self, completion: Box<dyn FnOnce(AnimatingPosition)>);

    /// Start animating.
    fn start(&self);
}

/// Builds host animators for a given [`Animation`].
pub trait AnimatorFactory {
    /// A fresh, unstarted animator with the animation's duration and curve.
    fn make_animator(&self, animation: &Animation) -> Rc<dyn PropertyAnimator>;
}
