// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passage_interaction --heading-base-level=0

//! Passage Interaction: drive interactive navigation transitions from a pan
//! gesture.
//!
//! An [`InteractionCoordinator`] receives each callback of a host pan
//! recognizer. When the gesture begins it creates an [`InteractiveTransition`]
//! and starts the pop; while it moves it reports progress along the
//! recognizer's [`GestureAxis`]; when it is released a [`CompletionPolicy`]
//! decides whether to finish or cancel.
//!
//! ## Completion
//!
//! A released gesture completes when it is flicked forward fast enough, or
//! when it crossed enough of the view and is not being flung back:
//!
//! ```
//! use passage_interaction::{Resolution, completion_speed, decide};
//!
//! assert_eq!(decide(700.0, 0.05), Resolution::Complete);
//! assert_eq!(decide(0.0, 0.25), Resolution::Complete);
//! assert_eq!(decide(-300.0, 0.5), Resolution::Cancel);
//!
//! // Faster releases finish faster, within bounds.
//! assert_eq!(completion_speed(1800.0), 2.25);
//! assert_eq!(completion_speed(500.0), 0.99);
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

mod coordinator;
mod gesture;
mod policy;

pub use coordinator::{InteractionCoordinator, InteractionFactory, InteractiveTransition};
pub use gesture::{GestureAxis, GesturePhase, PanGesture};
pub use policy::{CompletionPolicy, Resolution, completion_speed, decide};
