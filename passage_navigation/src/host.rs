// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host navigation controller, its delegate protocol, and split layouts.

use alloc::rc::Rc;
use alloc::vec::Vec;

use passage_animator::TransitionAnimatorProvider;
use passage_interaction::InteractiveTransition;
use passage_transition::Operation;

use crate::interactivity::{RecognizerConfig, RecognizerKind};
use crate::split::SplitColumns;

/// Identity of a host navigation controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub u64);

/// The operation a host reports when it asks for an animator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HostOperation {
    /// Not a push or a pop, such as a stack replacement without animation.
    #[default]
    None,
    /// An entry is being pushed.
    Push,
    /// An entry is being popped.
    Pop,
}

impl HostOperation {
    /// The transition operation, if this is a push or a pop.
    pub fn operation(self) -> Option<Operation> {
        match self {
            Self::None => None,
            Self::Push => Some(Operation::Push),
            Self::Pop => Some(Operation::Pop),
        }
    }
}

/// Callbacks a host navigation controller makes to its delegate.
///
/// Every method has a no-op default so plain observers only implement what
/// they need.
pub trait NavigationDelegate {
    /// An entry is about to be shown.
    fn will_show(&self, animated: bool) {
        let _ = animated;
    }

    /// An entry was shown.
    fn did_show(&self, animated: bool) {
        let _ = animated;
    }

    /// The animator to use for `operation`, or `None` for the host's own.
    fn animation_controller(&self, operation: HostOperation) -> Option<TransitionAnimatorProvider> {
        let _ = operation;
        None
    }

    /// The interactive transition driving the current animator, if any.
    fn interaction_controller(&self) -> Option<Rc<dyn InteractiveTransition>> {
        None
    }
}

/// A host navigation-stack controller.
pub trait NavigationController {
    /// What the stack holds.
    type Entry;

    /// Stable identity of this controller.
    fn id(&self) -> ControllerId;

    /// Number of entries on the stack.
    fn stack_len(&self) -> usize;

    /// Whether something is presented modally over the stack.
    fn is_presenting_modal(&self) -> bool;

    /// The current delegate.
    fn delegate(&self) -> Option<Rc<dyn NavigationDelegate>>;

    /// Replace the delegate.
    fn set_delegate(&self, delegate: Option<Rc<dyn NavigationDelegate>>);

    /// Push `entry`.
    fn push_entry(&self, entry: Self::Entry, animated: bool);

    /// Pop the top entry and return it.
    fn pop_entry(&self, animated: bool) -> Option<Self::Entry>;

    /// Pop down to `entry`, returning what was popped, or `None` if `entry` is
    /// not on the stack.
    fn pop_to_entry(&self, entry: &Self::Entry, animated: bool) -> Option<Vec<Self::Entry>>;

    /// Pop down to the root entry, returning what was popped.
    fn pop_to_root_entry(&self, animated: bool) -> Vec<Self::Entry>;

    /// Replace the whole stack.
    fn set_entries(&self, entries: Vec<Self::Entry>, animated: bool);

    /// Whether recognizer `kind` is installed.
    fn has_recognizer(&self, kind: RecognizerKind) -> bool;

    /// Install recognizer `kind`, disabled.
    fn install_recognizer(&self, kind: RecognizerKind);

    /// Set the axis and edge of the custom recognizer `kind`.
    fn configure_recognizer(&self, kind: RecognizerKind, config: RecognizerConfig);

    /// Enable or disable recognizer `kind`.
    fn set_recognizer_enabled(&self, kind: RecognizerKind, enabled: bool);
}

/// A host split controller whose columns may hold navigation controllers.
pub trait SplitController {
    /// The navigation controller type in the columns.
    type Controller: NavigationController;

    /// The navigation controller shown in a single `column`, if there is one.
    fn column(&self, column: SplitColumns) -> Option<Rc<Self::Controller>>;
}
