// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The delegate installed on controllers that carry a transition.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use passage_animator::host::AnimatorFactory;
use passage_animator::{AnyTransition, BridgeOptions, TransitionAnimatorProvider};
use passage_interaction::{InteractionCoordinator, InteractiveTransition};

use crate::host::{HostOperation, NavigationDelegate};

/// Navigation delegate that serves the installed transition.
///
/// Show callbacks are forwarded to the delegate that was on the controller
/// before, which is held weakly.
pub struct TransitionDelegate {
    transition: RefCell<AnyTransition>,
    base: Option<Weak<dyn NavigationDelegate>>,
    coordinator: InteractionCoordinator,
    animators: Rc<dyn AnimatorFactory>,
    options: BridgeOptions,
}

impl core::fmt::Debug for TransitionDelegate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransitionDelegate")
            .field("transition", &self.transition.borrow())
            .field("has_base", &self.base().is_some())
            .field("coordinator", &self.coordinator)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl TransitionDelegate {
    /// A delegate serving `transition`, forwarding to `base`.
    pub fn new(
        transition: AnyTransition,
        base: Option<&Rc<dyn NavigationDelegate>>,
        animators: Rc<dyn AnimatorFactory>,
        options: BridgeOptions,
    ) -> Self {
        Self {
            transition: RefCell::new(transition),
            base: base.map(Rc::downgrade),
            coordinator: InteractionCoordinator::new(),
            animators,
            options,
        }
    }

    /// The installed transition.
    pub fn transition(&self) -> AnyTransition {
        self.transition.borrow().clone()
    }

    /// Swap the installed transition.
    pub fn set_transition(&self, transition: AnyTransition) {
        *self.transition.borrow_mut() = transition;
    }

    /// The gesture coordinator for this controller.
    pub fn coordinator(&self) -> &InteractionCoordinator {
        &self.coordinator
    }

    /// Whether the installed transition animates.
    pub fn is_animated(&self) -> bool {
        self.transition.borrow().animation().is_some()
    }

    fn base(&self) -> Option<Rc<dyn NavigationDelegate>> {
        self.base.as_ref().and_then(Weak::upgrade)
    }
}

impl NavigationDelegate for TransitionDelegate {
    fn will_show(&self, animated: bool) {
        if let Some(base) = self.base() {
            base.will_show(animated);
        }
    }

    fn did_show(&self, animated: bool) {
        if let Some(base) = self.base() {
            base.did_show(animated);
        }
    }

    fn animation_controller(&self, operation: HostOperation) -> Option<TransitionAnimatorProvider> {
        let transition = self.transition.borrow();
        if transition.is_default() || transition.animation().is_none() {
            return None;
        }
        let operation = operation.operation()?;
        Some(
            TransitionAnimatorProvider::new(transition.clone(), operation, self.animators.clone())
                .with_options(self.options),
        )
    }

    fn interaction_controller(&self) -> Option<Rc<dyn InteractiveTransition>> {
        if self.transition.borrow().is_default() {
            None
        } else {
            self.coordinator.current()
        }
    }
}
