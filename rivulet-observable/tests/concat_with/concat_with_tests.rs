// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::sync::atomic::{AtomicBool, Ordering};
use rivulet_core::Observer;
use rivulet_observable::{Completable, ConcatWithExt, Observable};
use rivulet_test_utils::TestObserver;
use std::sync::Arc;

#[test]
fn test_values_then_side_effect_then_completion() {
    // Arrange
    let observer = Arc::new(TestObserver::<i32>::new());
    let side_effect = observer.clone();

    // Act - the trailing action surfaces its effect as an extra value
    Observable::range(1, 5)
        .concat_with(Completable::from_action(move || {
            side_effect.on_next(100);
            Ok(())
        }))
        .subscribe(observer.clone());

    // Assert
    observer.assert_result(&[1, 2, 3, 4, 5, 100]);
}

#[test]
fn test_empty_source_completes_after_side_effect() {
    // Arrange
    let observer = Arc::new(TestObserver::<i32>::new());
    let ran = Arc::new(AtomicBool::new(false));
    let ran_in_action = ran.clone();

    // Act
    Observable::<i32>::empty()
        .concat_with(Completable::from_action(move || {
            ran_in_action.store(true, Ordering::Release);
            Ok(())
        }))
        .subscribe(observer.clone());

    // Assert
    observer.assert_result(&[]);
    assert!(ran.load(Ordering::Acquire));
}

#[test]
fn test_side_effect_runs_after_last_value() {
    // Arrange
    let observer = Arc::new(TestObserver::<&'static str>::new());
    let seen_at_action = Arc::new(AtomicBool::new(false));

    let probe = observer.clone();
    let flag = seen_at_action.clone();

    // Act
    Observable::from_iter(["a", "b", "c"])
        .concat_with(Completable::from_action(move || {
            // All source values must already be delivered downstream
            flag.store(probe.values().len() == 3, Ordering::Release);
            Ok(())
        }))
        .subscribe(observer.clone());

    // Assert
    observer.assert_result(&["a", "b", "c"]);
    assert!(seen_at_action.load(Ordering::Acquire));
}

#[test]
fn test_completed_completable_completes_downstream() {
    let observer = Arc::new(TestObserver::<i32>::new());

    Observable::range(7, 2)
        .concat_with(Completable::complete())
        .subscribe(observer.clone());

    observer.assert_result(&[7, 8]);
}

#[test]
fn test_single_subscription_and_terminal_signal() {
    // Arrange
    let observer = Arc::new(TestObserver::<i32>::new());

    // Act
    Observable::range(1, 3)
        .concat_with(Completable::complete())
        .subscribe(observer.clone());

    // Assert - one on_subscribe, one terminal, despite two producers
    assert_eq!(observer.subscription_count(), 1);
    assert_eq!(observer.completion_count(), 1);
    assert_eq!(observer.error_count(), 0);
}
