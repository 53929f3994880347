// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turn pan-gesture callbacks into interactive transition progress.
//!
//! ## Usage
//!
//! 1) Keep one [`InteractionCoordinator`] per navigation controller.
//! 2) Route every recognizer callback to [`InteractionCoordinator::handle`],
//!    passing a closure that starts the pop.
//! 3) When the host asks for an interaction controller during that pop, hand
//!    it [`InteractionCoordinator::current`].

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::gesture::{GestureAxis, GesturePhase, PanGesture};
use crate::policy::{CompletionPolicy, Resolution};

/// A host-side percent-driven transition.
pub trait InteractiveTransition {
    /// Move the transition to `percent` complete.
    fn update(&self, percent: f64);

    /// Run the rest of the transition to its end.
    fn finish(&self);

    /// Run the transition back to its start.
    fn cancel(&self);

    /// Speed multiplier for whatever [`finish`](Self::finish) animates.
    fn set_completion_speed(&self, speed: f64);
}

/// Builds host interactive transitions.
pub trait InteractionFactory {
    /// A fresh interactive transition at zero percent.
    fn make_interaction(&self) -> Rc<dyn InteractiveTransition>;
}

/// Owns the interactive transition for the gesture in flight.
#[derive(Default)]
pub struct InteractionCoordinator {
    slot: RefCell<Option<Rc<dyn InteractiveTransition>>>,
    policy: CompletionPolicy,
}

impl core::fmt::Debug for InteractionCoordinator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InteractionCoordinator")
            .field("active", &self.is_active())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl InteractionCoordinator {
    /// A coordinator with the default [`CompletionPolicy`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A coordinator with a custom [`CompletionPolicy`].
    pub fn with_policy(policy: CompletionPolicy) -> Self {
        Self {
            slot: RefCell::new(None),
            policy,
        }
    }

    /// The policy used to resolve released gestures.
    pub fn policy(&self) -> &CompletionPolicy {
        &self.policy
    }

    /// The interactive transition of the gesture in flight, if any.
    pub fn current(&self) -> Option<Rc<dyn InteractiveTransition>> {
        self.slot.borrow().clone()
    }

    /// Whether a gesture is driving a transition.
    pub fn is_active(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Handle one recognizer callback.
    ///
    /// `begin` runs once when the gesture begins, after the new interactive
    /// transition is in place; it should start the pop. Returns the resolution
    /// when the gesture ends.
    pub fn handle(
        &self,
        gesture: &dyn PanGesture,
        axis: GestureAxis,
        factory: &dyn InteractionFactory,
        begin: impl FnOnce(),
    ) -> Option<Resolution> {
        let Some(size) = gesture.view_size() else {
            *self.slot.borrow_mut() = None;
            return None;
        };
        let extent = axis.extent(size);
        let translation = axis.component(gesture.translation());
        let percent = if extent > 0.0 {
            translation / extent
        } else {
            0.0
        };

        match gesture.phase() {
            GesturePhase::Possible => None,
            GesturePhase::Began => {
                let interaction = factory.make_interaction();
                *self.slot.borrow_mut() = Some(interaction.clone());
                begin();
                interaction.update(percent);
                None
            }
            GesturePhase::Changed => {
                let percent = percent.clamp(0.0, 1.0);
                log::trace!("interactive transition at {percent}");
                if let Some(interaction) = self.current() {
                    interaction.update(percent);
                }
                None
            }
            GesturePhase::Ended => {
                let velocity = axis.component(gesture.velocity());
                let resolution = self.policy.decide(velocity, percent);
                if let Some(interaction) = self.slot.take() {
                    match resolution {
                        Resolution::Complete => {
                            interaction.set_completion_speed(self.policy.completion_speed(velocity));
                            interaction.finish();
                        }
                        Resolution::Cancel => interaction.cancel(),
                    }
                }
                log::debug!("gesture ended at {percent} ({velocity}/s): {resolution:?}");
                Some(resolution)
            }
            GesturePhase::Cancelled | GesturePhase::Failed => {
                if let Some(interaction) = self.slot.take() {
                    interaction.cancel();
                }
                Some(Resolution::Cancel)
            }
        }
    }
}
