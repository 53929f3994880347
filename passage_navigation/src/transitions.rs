// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-controller transition state and the entry points that honor it.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;
use passage_animator::host::AnimatorFactory;
use passage_animator::{AnyTransition, BridgeOptions};
use passage_interaction::{InteractionFactory, PanGesture, Resolution};

use crate::delegate::TransitionDelegate;
use crate::host::{ControllerId, NavigationController, NavigationDelegate, SplitController};
use crate::interactivity::{Interactivity, RecognizerConfig, RecognizerKind, RecognizerSet};
use crate::split::SplitColumns;

struct Installed {
    delegate: Rc<TransitionDelegate>,
    /// The host's delegate at first install. The transition delegate only
    /// holds it weakly.
    base: Option<Rc<dyn NavigationDelegate>>,
    interactivity: Interactivity,
}

impl core::fmt::Debug for Installed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Installed")
            .field("delegate", &self.delegate)
            .field("has_base", &self.base.is_some())
            .field("interactivity", &self.interactivity)
            .finish()
    }
}

/// Transitions installed on navigation controllers, keyed by controller.
///
/// Callers route navigation through [`push`](Self::push), [`pop`](Self::pop),
/// and the other entry points here so that a controller with a transition
/// animates exactly when its transition has an animation.
pub struct NavigationTransitions {
    animators: Rc<dyn AnimatorFactory>,
    interactions: Rc<dyn InteractionFactory>,
    options: BridgeOptions,
    controllers: RefCell<HashMap<ControllerId, Installed>>,
}

impl core::fmt::Debug for NavigationTransitions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationTransitions")
            .field("options", &self.options)
            .field("controllers", &self.controllers.borrow())
            .finish_non_exhaustive()
    }
}

impl NavigationTransitions {
    /// An empty table that builds host animators and interactive transitions
    /// with the given factories.
    pub fn new(
        animators: Rc<dyn AnimatorFactory>,
        interactions: Rc<dyn InteractionFactory>,
    ) -> Self {
        Self {
            animators,
            interactions,
            options: BridgeOptions::default(),
            controllers: RefCell::new(HashMap::new()),
        }
    }

    /// Replace the bridge options used by delegates installed from now on.
    #[must_use]
    pub fn with_options(self, options: BridgeOptions) -> Self {
        Self { options, ..self }
    }

    /// The delegate installed on `id`, if any.
    pub fn delegate(&self, id: ControllerId) -> Option<Rc<TransitionDelegate>> {
        self.controllers
            .borrow()
            .get(&id)
            .map(|installed| installed.delegate.clone())
    }

    /// The interactivity configured for `id`, if any.
    pub fn interactivity(&self, id: ControllerId) -> Option<Interactivity> {
        self.controllers
            .borrow()
            .get(&id)
            .map(|installed| installed.interactivity)
    }

    /// Install `transition` on `controller`.
    ///
    /// The first call captures the controller's delegate and replaces it with a
    /// [`TransitionDelegate`]; later calls only swap the transition. Recognizers
    /// are installed as needed, configured for `interactivity`, and exactly one
    /// of them is left enabled.
    pub fn set_transition<C: NavigationController>(
        &self,
        controller: &C,
        transition: AnyTransition,
        interactivity: Interactivity,
    ) {
        let id = controller.id();
        let is_default = transition.is_default();

        match self.delegate(id) {
            Some(delegate) => delegate.set_transition(transition),
            None => {
                let base = controller.delegate();
                let delegate = Rc::new(TransitionDelegate::new(
                    transition,
                    base.as_ref(),
                    self.animators.clone(),
                    self.options,
                ));
                let as_host: Rc<dyn NavigationDelegate> = delegate.clone();
                controller.set_delegate(Some(as_host));
                self.controllers.borrow_mut().insert(
                    id,
                    Installed {
                        delegate,
                        base,
                        interactivity,
                    },
                );
            }
        }
        if let Some(installed) = self.controllers.borrow_mut().get_mut(&id) {
            installed.interactivity = interactivity;
        }

        for kind in RecognizerKind::ALL {
            if !controller.has_recognizer(kind) {
                controller.install_recognizer(kind);
            }
            if let Some(config) = RecognizerConfig::for_kind(kind, interactivity) {
                controller.configure_recognizer(kind, config);
            }
        }
        let set = RecognizerSet::select(interactivity, is_default);
        for kind in RecognizerKind::ALL {
            controller.set_recognizer_enabled(kind, set.is_enabled(kind));
        }
        log::debug!(
            "controller {id:?}: {interactivity:?} enables {:?}",
            set.enabled()
        );
    }

    /// Install `transition` on the navigation controller of every column in
    /// `columns` that has one.
    pub fn set_split_transition<S: SplitController>(
        &self,
        split: &S,
        columns: SplitColumns,
        transition: &AnyTransition,
        interactivity: Interactivity,
    ) {
        for column in SplitColumns::EACH {
            if !columns.contains(column) {
                continue;
            }
            if let Some(controller) = split.column(column) {
                self.set_transition(&*controller, transition.clone(), interactivity);
            }
        }
    }

    /// Push `entry`.
    pub fn push<C: NavigationController>(&self, controller: &C, entry: C::Entry, animated: bool) {
        controller.push_entry(entry, self.animated(controller.id(), animated));
    }

    /// Pop the top entry.
    pub fn pop<C: NavigationController>(&self, controller: &C, animated: bool) -> Option<C::Entry> {
        controller.pop_entry(self.animated(controller.id(), animated))
    }

    /// Pop down to `entry`.
    pub fn pop_to<C: NavigationController>(
        &self,
        controller: &C,
        entry: &C::Entry,
        animated: bool,
    ) -> Option<Vec<C::Entry>> {
        controller.pop_to_entry(entry, self.animated(controller.id(), animated))
    }

    /// Pop down to the root entry.
    pub fn pop_to_root<C: NavigationController>(
        &self,
        controller: &C,
        animated: bool,
    ) -> Vec<C::Entry> {
        controller.pop_to_root_entry(self.animated(controller.id(), animated))
    }

    /// Replace the stack.
    pub fn set_entries<C: NavigationController>(
        &self,
        controller: &C,
        entries: Vec<C::Entry>,
        animated: bool,
    ) {
        controller.set_entries(entries, self.animated(controller.id(), animated));
    }

    /// Whether a pop gesture may begin on `controller`.
    pub fn should_begin<C: NavigationController>(&self, controller: &C) -> bool {
        controller.stack_len() > 1 && !controller.is_presenting_modal()
    }

    /// Route a callback of the custom recognizer `kind` on `controller`.
    ///
    /// System recognizers are handled by the host and are ignored here, as are
    /// controllers without a transition. A gesture that begins pops through
    /// [`pop`](Self::pop).
    pub fn handle_pan<C: NavigationController>(
        &self,
        controller: &C,
        kind: RecognizerKind,
        gesture: &dyn PanGesture,
    ) -> Option<Resolution> {
        if kind.is_system() {
            return None;
        }
        let (delegate, interactivity) = {
            let controllers = self.controllers.borrow();
            let installed = controllers.get(&controller.id())?;
            (installed.delegate.clone(), installed.interactivity)
        };
        delegate
            .coordinator()
            .handle(gesture, interactivity.axis(), &*self.interactions, || {
                self.pop(controller, true);
            })
    }

    fn animated(&self, id: ControllerId, requested: bool) -> bool {
        self.delegate(id)
            .map_or(requested, |delegate| delegate.is_animated())
    }
}
