// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::sync::atomic::{AtomicBool, Ordering};
use parking_lot::Mutex;
use rivulet_core::{BooleanDisposable, CompletableSubject, Disposable, Observer};
use rivulet_observable::{Completable, ConcatWithExt, Observable, TakeExt};
use rivulet_test_utils::TestObserver;
use std::sync::Arc;

#[test]
fn test_cancel_while_side_effect_pending() {
    // Arrange - the source finishes immediately, the subject stays pending
    let subject = CompletableSubject::new();
    let observer = Arc::new(TestObserver::<i32>::new());

    Observable::<i32>::empty()
        .concat_with(subject.clone().into())
        .subscribe(observer.clone());

    assert!(subject.has_observers());
    observer.assert_not_terminated();

    // Act
    observer.dispose();

    // Assert - the pending task was released, nothing reaches downstream
    assert!(!subject.has_observers());
    subject.on_complete();
    observer.assert_not_terminated();
}

#[test]
fn test_truncated_source_never_starts_side_effect() {
    // Arrange
    let observer = Arc::new(TestObserver::<i32>::new());
    let ran = Arc::new(AtomicBool::new(false));
    let ran_in_action = ran.clone();

    // Act - only a prefix of the source is consumed
    Observable::range(1, 5)
        .concat_with(Completable::from_action(move || {
            ran_in_action.store(true, Ordering::Release);
            Ok(())
        }))
        .take(3)
        .subscribe(observer.clone());

    // Assert - synthetic completion, the trailing task never ran
    observer.assert_result(&[1, 2, 3]);
    assert!(!ran.load(Ordering::Acquire));
}

#[test]
fn test_upstream_resource_disposed_when_limit_hit() {
    // Arrange - a source that checks its own resource around each emission
    let observer = Arc::new(TestObserver::<i32>::new());
    let source = Observable::create(|downstream: Arc<dyn Observer<i32>>| {
        let resource = Arc::new(BooleanDisposable::new());
        downstream.on_subscribe(resource.clone());
        assert!(!resource.is_disposed());

        downstream.on_next(1);

        // take(1) reached its limit and must have released the upstream
        assert!(resource.is_disposed());
    });

    // Act
    source
        .concat_with(Completable::complete())
        .take(1)
        .subscribe(observer.clone());

    // Assert
    observer.assert_result(&[1]);
}

#[test]
fn test_cancel_before_source_completion_blocks_hand_over() {
    // Arrange - a source whose completion the test triggers by hand
    let observer = Arc::new(TestObserver::<i32>::new());
    let ran = Arc::new(AtomicBool::new(false));
    let ran_in_action = ran.clone();

    let captured: Arc<Mutex<Option<Arc<dyn Observer<i32>>>>> = Arc::new(Mutex::new(None));
    let slot = captured.clone();
    let source = Observable::create(move |downstream: Arc<dyn Observer<i32>>| {
        downstream.on_subscribe(Arc::new(BooleanDisposable::new()));
        downstream.on_next(1);
        *slot.lock() = Some(downstream);
    });

    source
        .concat_with(Completable::from_action(move || {
            ran_in_action.store(true, Ordering::Release);
            Ok(())
        }))
        .subscribe(observer.clone());

    assert_eq!(observer.values(), vec![1]);

    // Act - cancel, then let the source complete anyway
    observer.dispose();
    let downstream = captured.lock().take().expect("source captured observer");
    downstream.on_complete();

    // Assert - the trailing task never started, no terminal signal arrived
    assert!(!ran.load(Ordering::Acquire));
    observer.assert_not_terminated();
}

#[test]
fn test_values_after_cancellation_are_discarded() {
    // Arrange
    let observer = Arc::new(TestObserver::<i32>::new());

    let captured: Arc<Mutex<Option<Arc<dyn Observer<i32>>>>> = Arc::new(Mutex::new(None));
    let slot = captured.clone();
    let source = Observable::create(move |downstream: Arc<dyn Observer<i32>>| {
        downstream.on_subscribe(Arc::new(BooleanDisposable::new()));
        downstream.on_next(1);
        *slot.lock() = Some(downstream);
    });

    source
        .concat_with(Completable::complete())
        .subscribe(observer.clone());

    // Act
    observer.dispose();
    let downstream = captured.lock().take().expect("source captured observer");
    downstream.on_next(2);
    downstream.on_error(rivulet_test_utils::test_error("late"));

    // Assert - nothing after the cancellation reached the downstream
    assert_eq!(observer.values(), vec![1]);
    observer.assert_not_terminated();
}
