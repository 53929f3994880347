// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passage_transition --heading-base-level=0

//! Passage Transition: a declarative algebra for navigation-stack push/pop transitions.
//!
//! This crate describes *what* a transition does to the two surfaces involved in
//! a navigation operation. It does not animate anything. An animator bridge
//! (see `passage_animator`) turns the result into calls on a host animator.
//!
//! ## Layers
//!
//! - [`SurfaceProperties`]: a sparse set of animatable properties (offset,
//!   opacity, scale, corner radius, stacking order, visibility).
//! - [`TransientSurface`]: three phases of [`SurfaceProperties`] for one surface:
//!   `initial`, `animation`, and `completion`.
//! - [`AtomicTransition`](atomic::AtomicTransition): an immutable tree of
//!   single-surface mutators, composed with the functions in [`atomic`], and
//!   mirrorable so pop behavior can be derived from push behavior.
//! - [`NavigationTransition`](navigation::NavigationTransition): atomic
//!   transitions wired to push or pop over a `from`/`to` pair, composed with the
//!   functions in [`navigation`].
//! - [`builtin`]: ready-made fades and slides.
//! - [`Animation`]: duration and timing curve for the host animator.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use passage_transition::atomic::{self, AtomicTransition};
//! use passage_transition::{navigation, Container, Edge, Operation, SurfaceProperties, TransientSurface};
//!
//! // Push: the new surface slides up from the bottom while the old one shrinks.
//! let push = atomic::group([
//!     atomic::on_insertion(AtomicTransition::Move(Edge::Bottom)),
//!     atomic::on_removal(AtomicTransition::Scale(0.9)),
//! ]);
//! // Pop plays the same thing backwards.
//! let transition = navigation::mirror_push(push).unwrap();
//!
//! let container = Container::new(Size::new(390.0, 844.0));
//! let mut from = TransientSurface::new(SurfaceProperties::baseline());
//! let mut to = TransientSurface::new(SurfaceProperties::baseline());
//! transition.apply(&mut from, &mut to, Operation::Push, &container);
//!
//! assert_eq!(to.initial.offset, Some(Vec2::new(0.0, 844.0)));
//! assert_eq!(from.animation.scale, Some(Vec2::new(0.9, 0.9)));
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

pub mod atomic;
pub mod builtin;
pub mod navigation;

mod animation;
mod operation;
mod properties;
mod surface;
mod transient;

pub use animation::{Animation, TimingCurve};
pub use navigation::{NavigationTransition, NotMirrorable};
pub use operation::{Container, Edge, Operation, Role};
pub use properties::{PropertyKind, PropertyValue, SurfaceProperties};
pub use surface::Surface;
pub use transient::{Phase, TransientSurface};
