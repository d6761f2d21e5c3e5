// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::sync::atomic::{AtomicBool, Ordering};
use rivulet_core::{BooleanDisposable, CompletableObserver, Observer};
use rivulet_observable::{Completable, ConcatWithExt, Observable};
use rivulet_test_utils::{test_error, TestObserver};
use std::sync::Arc;

#[test]
fn test_source_error_skips_side_effect() {
    // Arrange
    let observer = Arc::new(TestObserver::<i32>::new());
    let ran = Arc::new(AtomicBool::new(false));
    let ran_in_action = ran.clone();

    // Act
    Observable::<i32>::error(test_error("primary"))
        .concat_with(Completable::from_action(move || {
            ran_in_action.store(true, Ordering::Release);
            Ok(())
        }))
        .subscribe(observer.clone());

    // Assert - error forwarded verbatim, trailing task never subscribed
    observer.assert_failure(&[]);
    assert!(observer.error_messages()[0].contains("primary"));
    assert!(!ran.load(Ordering::Acquire));
}

#[test]
fn test_side_effect_error_after_values() {
    // Arrange
    let observer = Arc::new(TestObserver::<i32>::new());

    // Act
    Observable::range(1, 5)
        .concat_with(Completable::error(test_error("secondary")))
        .subscribe(observer.clone());

    // Assert - values already emitted stay delivered
    observer.assert_failure(&[1, 2, 3, 4, 5]);
    assert!(observer.error_messages()[0].contains("secondary"));
}

#[test]
fn test_failing_action_error_is_forwarded() {
    // Arrange
    let observer = Arc::new(TestObserver::<i32>::new());

    // Act
    Observable::range(1, 2)
        .concat_with(Completable::from_action(|| Err(test_error("boom"))))
        .subscribe(observer.clone());

    // Assert
    observer.assert_failure(&[1, 2]);
    assert!(observer.error_messages()[0].contains("boom"));
}

#[test]
fn test_post_terminal_signals_are_discarded() {
    // Arrange - a source that keeps signalling after its terminal error
    let observer = Arc::new(TestObserver::<i32>::new());
    let source = Observable::create(|downstream: Arc<dyn Observer<i32>>| {
        downstream.on_subscribe(Arc::new(BooleanDisposable::new()));
        downstream.on_error(test_error("first"));
        downstream.on_error(test_error("second"));
        downstream.on_next(42);
        downstream.on_complete();
    });

    // Act
    source
        .concat_with(Completable::complete())
        .subscribe(observer.clone());

    // Assert - only the first terminal signal got through
    observer.assert_failure(&[]);
    assert!(observer.error_messages()[0].contains("first"));
}

#[test]
fn test_completable_signalling_twice_is_discarded() {
    // Arrange - a trailing task that completes twice
    let observer = Arc::new(TestObserver::<i32>::new());
    let other = Completable::create(|downstream| {
        downstream.on_subscribe(Arc::new(BooleanDisposable::new()));
        downstream.on_complete();
        downstream.on_complete();
        downstream.on_error(test_error("late"));
    });

    // Act
    Observable::range(1, 3)
        .concat_with(other)
        .subscribe(observer.clone());

    // Assert - exactly one terminal signal downstream
    observer.assert_result(&[1, 2, 3]);
}
