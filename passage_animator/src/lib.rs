// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passage_animator --heading-base-level=0

//! Passage Animator: run declarative navigation transitions on a host's
//! interruptible property animator.
//!
//! The host implements the traits in [`host`]: a container view, a transition
//! context, and an animator factory. A [`TransitionAnimatorProvider`] then
//! turns an [`AnyTransition`] into phase writes on the two surfaces involved.
//!
//! - `initial` values are written before the animation starts.
//! - `animation` values are registered as the animator's animation block.
//! - `completion` values are written when the animator finishes, or every
//!   property is reset to its baseline if the transition was cancelled.
//!
//! Animators are cached per transition context, so an interactive gesture and
//! the non-interactive path drive the same instance.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use passage_animator::host::{AnimatingPosition, AnimatorFactory, PropertyAnimator};
//! use passage_animator::{AnyTransition, TransitionAnimatorProvider};
//! use passage_transition::builtin::FadeStyle;
//! use passage_transition::{Animation, Operation};
//!
//! #[derive(Default)]
//! struct Animator {
//!     animations: RefCell<Vec<Box<dyn FnOnce()>>>,
//!     completions: RefCell<Vec<Box<dyn FnOnce(AnimatingPosition)>>>,
//! }
//!
//! impl PropertyAnimator for Animator {
//!     fn add_animations(&self, a: Box<dyn FnOnce()>) { self.animations.borrow_mut().push(a); }
//!     fn add_completion(&self, c: Box<dyn FnOnce(AnimatingPosition)>) { self.completions.borrow_mut().push(c); }
//!     fn start(&self) {}
//! }
//!
//! struct Factory;
//!
//! impl AnimatorFactory for Factory {
//!     fn make_animator(&self, _: &Animation) -> Rc<dyn PropertyAnimator> {
//!         Rc::new(Animator::default())
//!     }
//! }
//!
//! let transition = AnyTransition::fade(FadeStyle::Cross).with_animation(Some(Animation::linear(0.5)));
//! let provider = TransitionAnimatorProvider::new(transition, Operation::Push, Rc::new(Factory));
//! assert_eq!(provider.transition_duration(), 0.5);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;

mod any;
mod provider;

pub use any::{AnyTransition, Handler, PrimitiveFn, PrimitiveTransition};
pub use provider::{BridgeOptions, BridgeState, TransitionAnimatorProvider};
