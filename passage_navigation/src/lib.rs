// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passage_navigation --heading-base-level=0

//! Passage Navigation: install declarative transitions on host navigation
//! controllers.
//!
//! The host implements [`NavigationController`] (and [`SplitController`] for
//! split layouts). [`NavigationTransitions`] keeps one entry per controller:
//!
//! - a [`TransitionDelegate`] that answers the host's animator and interaction
//!   requests, and forwards show callbacks to the delegate it replaced;
//! - the [`Interactivity`] scheme, which decides which of the four
//!   [`RecognizerKind`]s is enabled.
//!
//! Navigation goes through the wrapped entry points
//! ([`push`](NavigationTransitions::push), [`pop`](NavigationTransitions::pop),
//! [`pop_to`](NavigationTransitions::pop_to),
//! [`pop_to_root`](NavigationTransitions::pop_to_root),
//! [`set_entries`](NavigationTransitions::set_entries)). On a controller with a
//! transition they animate exactly when the transition has an animation.
//!
//! Recognizer callbacks are routed through
//! [`handle_pan`](NavigationTransitions::handle_pan), gated by
//! [`should_begin`](NavigationTransitions::should_begin).
//!
//! ```
//! use passage_navigation::{HostOperation, Interactivity, SplitColumns};
//! use passage_interaction::GestureAxis;
//! use passage_transition::{Edge, Operation};
//!
//! assert_eq!(HostOperation::Pop.operation(), Some(Operation::Pop));
//! assert_eq!(HostOperation::None.operation(), None);
//! assert_eq!(Interactivity::EdgePanVertical.axis(), GestureAxis::Vertical);
//! assert_eq!(Interactivity::EdgePanVertical.edge(), Edge::Top);
//! assert!(SplitColumns::ALL.contains(SplitColumns::COMPACT));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to the `std` feature of the other Passage crates.
//! - `libm`: forwards their `libm` feature for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod delegate;
mod host;
mod interactivity;
mod split;
mod transitions;

pub use delegate::TransitionDelegate;
pub use host::{
    ControllerId, HostOperation, NavigationController, NavigationDelegate, SplitController,
};
pub use interactivity::{Interactivity, RecognizerConfig, RecognizerKind, RecognizerSet};
pub use split::SplitColumns;
pub use transitions::NavigationTransitions;
