// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `passage_interaction` coordinator.
//!
//! A scripted pan gesture is fed through [`InteractionCoordinator::handle`] and
//! the calls reaching the interactive transition are recorded.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Size, Vec2};
use passage_interaction::{
    CompletionPolicy, GestureAxis, GesturePhase, InteractionCoordinator, InteractionFactory,
    InteractiveTransition, PanGesture, Resolution,
};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Update(f64),
    Speed(f64),
    Finish,
    Cancel,
}

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<Call>>,
}

impl InteractiveTransition for Recorder {
    fn update(&self, percent: f64) {
        self.calls.borrow_mut().push(Call::Update(percent));
    }

    fn finish(&self) {
        self.calls.borrow_mut().push(Call::Finish);
    }

    fn cancel(&self) {
        self.calls.borrow_mut().push(Call::Cancel);
    }

    fn set_completion_speed(&self, speed: f64) {
        self.calls.borrow_mut().push(Call::Speed(speed));
    }
}

#[derive(Default)]
struct Factory {
    made: RefCell<Vec<Rc<Recorder>>>,
}

impl Factory {
    fn calls(&self) -> Vec<Call> {
        self.made
            .borrow()
            .last()
            .map(|r| r.calls.borrow().clone())
            .unwrap_or_default()
    }
}

impl InteractionFactory for Factory {
    fn make_interaction(&self) -> Rc<dyn InteractiveTransition> {
        let recorder = Rc::new(Recorder::default());
        self.made.borrow_mut().push(recorder.clone());
        recorder
    }
}

struct Pan {
    phase: Cell<GesturePhase>,
    size: Cell<Option<Size>>,
    translation: Cell<Vec2>,
    velocity: Cell<Vec2>,
}

impl Pan {
    fn new() -> Self {
        Self {
            phase: Cell::new(GesturePhase::Possible),
            size: Cell::new(Some(Size::new(400.0, 800.0))),
            translation: Cell::new(Vec2::ZERO),
            velocity: Cell::new(Vec2::ZERO),
        }
    }

    fn at(&self, phase: GesturePhase, translation: Vec2) -> &Self {
        self.phase.set(phase);
        self.translation.set(translation);
        self
    }
}

impl PanGesture for Pan {
    fn phase(&self) -> GesturePhase {
        self.phase.get()
    }

    fn view_size(&self) -> Option<Size> {
        self.size.get()
    }

    fn translation(&self) -> Vec2 {
        self.translation.get()
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.get()
    }
}

#[test]
fn begin_creates_the_transition_before_popping() {
    let coordinator = InteractionCoordinator::new();
    let factory = Factory::default();
    let pan = Pan::new();
    let saw_slot = Cell::new(false);

    coordinator.handle(
        pan.at(GesturePhase::Began, Vec2::new(40.0, 0.0)),
        GestureAxis::Horizontal,
        &factory,
        || saw_slot.set(coordinator.current().is_some()),
    );

    assert!(saw_slot.get());
    assert!(coordinator.is_active());
    assert_eq!(factory.calls(), [Call::Update(0.1)]);
}

#[test]
fn changed_clamps_percent() {
    let coordinator = InteractionCoordinator::new();
    let factory = Factory::default();
    let pan = Pan::new();
    let axis = GestureAxis::Horizontal;

    coordinator.handle(pan.at(GesturePhase::Began, Vec2::ZERO), axis, &factory, || {});
    coordinator.handle(pan.at(GesturePhase::Changed, Vec2::new(200.0, 0.0)), axis, &factory, || {});
    coordinator.handle(pan.at(GesturePhase::Changed, Vec2::new(-50.0, 0.0)), axis, &factory, || {});
    coordinator.handle(pan.at(GesturePhase::Changed, Vec2::new(900.0, 0.0)), axis, &factory, || {});

    assert_eq!(
        factory.calls(),
        [
            Call::Update(0.0),
            Call::Update(0.5),
            Call::Update(0.0),
            Call::Update(1.0)
        ]
    );
}

#[test]
fn fast_release_finishes_with_speed() {
    let coordinator = InteractionCoordinator::new();
    let factory = Factory::default();
    let pan = Pan::new();
    let axis = GestureAxis::Horizontal;

    coordinator.handle(pan.at(GesturePhase::Began, Vec2::ZERO), axis, &factory, || {});
    pan.velocity.set(Vec2::new(1800.0, 0.0));
    let resolution = coordinator.handle(
        pan.at(GesturePhase::Ended, Vec2::new(20.0, 0.0)),
        axis,
        &factory,
        || {},
    );

    assert_eq!(resolution, Some(Resolution::Complete));
    assert_eq!(
        factory.calls(),
        [Call::Update(0.0), Call::Speed(2.25), Call::Finish]
    );
    assert!(!coordinator.is_active());
}

#[test]
fn short_slow_release_cancels() {
    let coordinator = InteractionCoordinator::new();
    let factory = Factory::default();
    let pan = Pan::new();
    let axis = GestureAxis::Horizontal;

    coordinator.handle(pan.at(GesturePhase::Began, Vec2::ZERO), axis, &factory, || {});
    let resolution = coordinator.handle(
        pan.at(GesturePhase::Ended, Vec2::new(40.0, 0.0)),
        axis,
        &factory,
        || {},
    );

    assert_eq!(resolution, Some(Resolution::Cancel));
    assert_eq!(factory.calls(), [Call::Update(0.0), Call::Cancel]);
    assert!(!coordinator.is_active());
}

#[test]
fn vertical_axis_uses_height() {
    let coordinator = InteractionCoordinator::new();
    let factory = Factory::default();
    let pan = Pan::new();

    coordinator.handle(
        pan.at(GesturePhase::Began, Vec2::new(400.0, 200.0)),
        GestureAxis::Vertical,
        &factory,
        || {},
    );
    assert_eq!(factory.calls(), [Call::Update(0.25)]);
}

#[test]
fn system_cancel_and_failure_clear_the_slot() {
    for phase in [GesturePhase::Cancelled, GesturePhase::Failed] {
        let coordinator = InteractionCoordinator::new();
        let factory = Factory::default();
        let pan = Pan::new();
        let axis = GestureAxis::Horizontal;

        coordinator.handle(pan.at(GesturePhase::Began, Vec2::ZERO), axis, &factory, || {});
        coordinator.handle(pan.at(phase, Vec2::new(300.0, 0.0)), axis, &factory, || {});

        assert_eq!(factory.calls(), [Call::Update(0.0), Call::Cancel]);
        assert!(!coordinator.is_active());
    }
}

#[test]
fn detached_view_clears_without_calls() {
    let coordinator = InteractionCoordinator::new();
    let factory = Factory::default();
    let pan = Pan::new();
    let axis = GestureAxis::Horizontal;

    coordinator.handle(pan.at(GesturePhase::Began, Vec2::ZERO), axis, &factory, || {});
    pan.size.set(None);
    let resolution =
        coordinator.handle(pan.at(GesturePhase::Changed, Vec2::new(100.0, 0.0)), axis, &factory, || {});

    assert_eq!(resolution, None);
    assert!(!coordinator.is_active());
    assert_eq!(factory.calls(), [Call::Update(0.0)]);
}

#[test]
fn possible_does_nothing() {
    let coordinator = InteractionCoordinator::new();
    let factory = Factory::default();
    let popped = Cell::new(false);
    coordinator.handle(
        Pan::new().at(GesturePhase::Possible, Vec2::new(10.0, 0.0)),
        GestureAxis::Horizontal,
        &factory,
        || popped.set(true),
    );
    assert!(!popped.get());
    assert!(factory.made.borrow().is_empty());
}

#[test]
fn custom_policy_applies() {
    let coordinator = InteractionCoordinator::with_policy(CompletionPolicy {
        min_percent: 0.05,
        ..CompletionPolicy::default()
    });
    let factory = Factory::default();
    let pan = Pan::new();
    let axis = GestureAxis::Horizontal;

    coordinator.handle(pan.at(GesturePhase::Began, Vec2::ZERO), axis, &factory, || {});
    let resolution = coordinator.handle(
        pan.at(GesturePhase::Ended, Vec2::new(40.0, 0.0)),
        axis,
        &factory,
        || {},
    );
    assert_eq!(resolution, Some(Resolution::Complete));
}
