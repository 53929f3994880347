// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run a transition on a host animator.
//!
//! [`TransitionAnimatorProvider`] is what a navigation delegate hands back to
//! the host for one push or pop. For each transition context it builds one
//! host animator, wires the transition's phases into it, and caches it so the
//! interactive and non-interactive entry points share the same instance.
//!
//! The bridge moves through [`BridgeState`]:
//!
//! - `Idle`: make and cache the animator.
//! - `SurfacesPrepared`: order the surfaces in the container. Interaction on
//!   both is disabled for every kind of transition.
//! - `PhasesComputed`: run the declarative tree over two transient surfaces
//!   (or hand the animator to a primitive handler).
//! - `Animating`: `initial` is applied, `animation` and `completion` are
//!   registered with the animator.
//! - `Completed` or `Cancelled`: the host was told, interaction is back on.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use hashbrown::HashMap;
use passage_transition::{
    Animation, Container, Operation, Phase, SurfaceProperties, TransientSurface,
};

use crate::any::{AnyTransition, Handler};
use crate::host::{
    AnimatingPosition, AnimatorFactory, ContextId, PropertyAnimator, SurfaceKey, SurfaceRef,
    TransitioningContext,
};

/// Where the bridge is in running a transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BridgeState {
    /// Nothing prepared yet.
    #[default]
    Idle,
    /// Surfaces are ordered in the container.
    SurfacesPrepared,
    /// Transient phases are known.
    PhasesComputed,
    /// Phases are registered with the animator.
    Animating,
    /// The host was told the transition completed.
    Completed,
    /// The host was told the transition was cancelled.
    Cancelled,
}

/// Bridge configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BridgeOptions {
    /// After completion, remove and re-add the surface that stays on screen.
    ///
    /// Some hosts leave the container's child list stale after an interrupted
    /// transition; re-adding the remaining surface normalizes it.
    pub reinsert_after_completion: bool,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            reinsert_after_completion: true,
        }
    }
}

/// Provides host animators for one push or pop.
pub struct TransitionAnimatorProvider {
    transition: AnyTransition,
    animation: Animation,
    operation: Operation,
    factory: Rc<dyn AnimatorFactory>,
    options: BridgeOptions,
    states: Rc<RefCell<HashMap<ContextId, BridgeState>>>,
    cache: RefCell<HashMap<ContextId, Rc<dyn PropertyAnimator>>>,
}

impl core::fmt::Debug for TransitionAnimatorProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransitionAnimatorProvider")
            .field("transition", &self.transition)
            .field("animation", &self.animation)
            .field("operation", &self.operation)
            .field("options", &self.options)
            .field("states", &self.states.borrow())
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

impl TransitionAnimatorProvider {
    /// A provider for `operation` that builds animators with `factory`.
    ///
    /// A transition without an animation runs with [`Animation::default`].
    pub fn new(
        transition: AnyTransition,
        operation: Operation,
        factory: Rc<dyn AnimatorFactory>,
    ) -> Self {
        Self {
            animation: transition.animation().unwrap_or_default(),
            transition,
            operation,
            factory,
            options: BridgeOptions::default(),
            states: Rc::new(RefCell::new(HashMap::new())),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Replace the bridge options.
    #[must_use]
    pub fn with_options(self, options: BridgeOptions) -> Self {
        Self { options, ..self }
    }

    /// The operation this provider animates.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Bridge state of `context`. Contexts this provider has not seen, or has
    /// forgotten in [`animation_ended`](Self::animation_ended), are `Idle`.
    pub fn state(&self, context: ContextId) -> BridgeState {
        self.states
            .borrow()
            .get(&context)
            .copied()
            .unwrap_or(BridgeState::Idle)
    }

    /// Duration of the transition in seconds.
    pub fn transition_duration(&self) -> f64 {
        self.animation.duration
    }

    /// Start the animator for `context`.
    pub fn animate_transition(&self, context: &Rc<dyn TransitioningContext>) {
        self.transition_animator(context).start();
    }

    /// The animator for `context`, built on first request and cached after.
    pub fn interruptible_animator(
        &self,
        context: &Rc<dyn TransitioningContext>,
    ) -> Rc<dyn PropertyAnimator> {
        self.transition_animator(context)
    }

    /// Drop cached animators and their states once the host is done with them.
    pub fn animation_ended(&self, completed: bool) {
        log::debug!("transition animation ended (completed: {completed})");
        self.cache.borrow_mut().clear();
        self.states.borrow_mut().clear();
    }

    fn transition_animator(
        &self,
        context: &Rc<dyn TransitioningContext>,
    ) -> Rc<dyn PropertyAnimator> {
        let id = context.id();
        if let Some(animator) = self.cache.borrow().get(&id) {
            return animator.clone();
        }

        let animator = self.factory.make_animator(&self.animation);
        self.cache.borrow_mut().insert(id, animator.clone());
        self.states.borrow_mut().insert(id, BridgeState::Idle);

        let (Some(from), Some(to)) = (
            context.surface(SurfaceKey::From),
            context.surface(SurfaceKey::To),
        ) else {
            log::debug!("transition context {id:?} is missing a surface");
            let context = context.clone();
            animator.add_completion(Box::new(move |_: AnimatingPosition| {
                context.complete_transition(!context.was_cancelled());
            }));
            return animator;
        };

        from.set_interaction_enabled(false);
        to.set_interaction_enabled(false);

        match self.transition.handler() {
            Handler::Declarative(tree) => {
                self.order_surfaces(context, &from, &to);
                self.advance(id, BridgeState::SurfacesPrepared);
                let container = Container::new(context.container().size());
                let mut from_view = TransientSurface::capture(&*from);
                let mut to_view = TransientSurface::capture(&*to);
                tree.apply(&mut from_view, &mut to_view, self.operation, &container);
                self.advance(id, BridgeState::PhasesComputed);

                for (view, surface) in [(from_view, from.clone()), (to_view, to.clone())] {
                    register_phases(&animator, context, view, surface);
                }
            }
            Handler::Primitive(primitive) => {
                self.advance(id, BridgeState::PhasesComputed);
                primitive.call(&animator, self.operation, context);
            }
        }
        self.advance(id, BridgeState::Animating);

        let context = context.clone();
        let states = self.states.clone();
        let reinsert = self.options.reinsert_after_completion;
        animator.add_completion(Box::new(move |_: AnimatingPosition| {
            let cancelled = context.was_cancelled();
            context.complete_transition(!cancelled);
            from.set_interaction_enabled(true);
            to.set_interaction_enabled(true);
            if reinsert {
                let remaining = if cancelled { &from } else { &to };
                let container = context.container();
                container.remove(remaining);
                container.add(remaining);
            }
            let end = if cancelled {
                BridgeState::Cancelled
            } else {
                BridgeState::Completed
            };
            log::debug!("transition bridge {id:?} -> {end:?}");
            states.borrow_mut().insert(id, end);
        }));

        animator
    }

    fn order_surfaces(
        &self,
        context: &Rc<dyn TransitioningContext>,
        from: &SurfaceRef,
        to: &SurfaceRef,
    ) {
        let container = context.container();
        match self.operation {
            Operation::Push => container.insert_above(to, from),
            Operation::Pop => container.insert_below(to, from),
        }
    }

    fn advance(&self, context: ContextId, state: BridgeState) {
        log::debug!("transition bridge {context:?} -> {state:?}");
        self.states.borrow_mut().insert(context, state);
    }
}

/// Apply `initial` now and hand `animation` and `completion` to the animator.
fn register_phases(
    animator: &Rc<dyn PropertyAnimator>,
    context: &Rc<dyn TransitioningContext>,
    view: TransientSurface,
    surface: SurfaceRef,
) {
    view.apply_phase(Phase::Initial, &*surface);

    let animation = view.animation;
    let target = surface.clone();
    animator.add_animations(Box::new(move || animation.apply(&*target)));

    let completion = view.completion;
    let context = context.clone();
    animator.add_completion(Box::new(move |_: AnimatingPosition| {
        if context.was_cancelled() {
            SurfaceProperties::reset(&*surface);
        } else {
            completion.apply(&*surface);
        }
    }));
}
