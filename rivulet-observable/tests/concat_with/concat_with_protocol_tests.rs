// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{BooleanDisposable, CompletableObserver, Disposable, Observer};
use rivulet_observable::{Completable, ConcatWithExt, Observable};
use rivulet_test_utils::{CountingDisposable, TestObserver};
use std::sync::Arc;

#[test]
fn test_duplicate_on_subscribe_from_source_is_neutralized() {
    // Arrange - a non-conforming source that hands out two resources
    let observer = Arc::new(TestObserver::<i32>::new());
    let source = Observable::create(|downstream: Arc<dyn Observer<i32>>| {
        let first = Arc::new(BooleanDisposable::new());
        downstream.on_subscribe(first.clone());

        let second = Arc::new(BooleanDisposable::new());
        downstream.on_subscribe(second.clone());

        // The first resource stays live, the second is disposed immediately
        assert!(!first.is_disposed());
        assert!(second.is_disposed());

        downstream.on_complete();
    });

    // Act
    source
        .concat_with(Completable::complete())
        .subscribe(observer.clone());

    // Assert - the violation is invisible downstream
    observer.assert_result(&[]);
}

#[test]
fn test_duplicate_on_subscribe_from_completable_is_neutralized() {
    // Arrange - a non-conforming trailing task doing the same
    let observer = Arc::new(TestObserver::<i32>::new());
    let other = Completable::create(|downstream| {
        let first = Arc::new(BooleanDisposable::new());
        downstream.on_subscribe(first.clone());

        let second = Arc::new(BooleanDisposable::new());
        downstream.on_subscribe(second.clone());

        assert!(!first.is_disposed());
        assert!(second.is_disposed());

        downstream.on_complete();
    });

    // Act
    Observable::range(1, 2)
        .concat_with(other)
        .subscribe(observer.clone());

    // Assert
    observer.assert_result(&[1, 2]);
}

#[test]
fn test_hand_over_releases_source_resource_once() {
    // Arrange - count how often the source's resource gets disposed
    let source_resource = Arc::new(CountingDisposable::new());
    let in_source = source_resource.clone();

    let observer = Arc::new(TestObserver::<i32>::new());
    let source = Observable::create(move |downstream: Arc<dyn Observer<i32>>| {
        downstream.on_subscribe(in_source.clone());
        downstream.on_next(1);
        downstream.on_complete();
    });

    // Act
    source
        .concat_with(Completable::complete())
        .subscribe(observer.clone());

    // Assert - replaced on hand-over, disposed exactly once
    observer.assert_result(&[1]);
    assert_eq!(source_resource.dispose_calls(), 1);
}

#[test]
fn test_completable_resource_released_on_completion() {
    // Arrange
    let task_resource = Arc::new(CountingDisposable::new());
    let in_task = task_resource.clone();

    let observer = Arc::new(TestObserver::<i32>::new());
    let other = Completable::create(move |downstream| {
        downstream.on_subscribe(in_task.clone());
        downstream.on_complete();
    });

    // Act
    Observable::range(1, 3)
        .concat_with(other)
        .subscribe(observer.clone());

    // Assert - terminal cleanup released the task's resource exactly once
    observer.assert_result(&[1, 2, 3]);
    assert_eq!(task_resource.dispose_calls(), 1);
}
