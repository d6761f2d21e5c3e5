// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Recording observer with assertion helpers.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use event_listener::Event;
use parking_lot::Mutex;
use rivulet_core::{CompletableObserver, Disposable, Observer, RivuletError};
use std::fmt::Debug;
use std::sync::Arc;

/// An observer that records every signal it receives.
///
/// `TestObserver` implements both [`Observer`] and [`CompletableObserver`],
/// so one instance can sit at the end of a value-emitting sequence or of an
/// action-only task. It keeps the cancellation capability received through
/// `on_subscribe`, allowing tests to cancel the subscription through
/// [`dispose`](TestObserver::dispose) at any point.
///
/// Terminal signals trip an internal event, so async tests can park on
/// [`await_terminal`](TestObserver::await_terminal) instead of polling.
///
/// # Example
///
/// ```
/// use rivulet_core::Observer;
/// use rivulet_test_utils::TestObserver;
///
/// let observer = TestObserver::new();
/// observer.on_next(1);
/// observer.on_next(2);
/// observer.on_complete();
///
/// observer.assert_result(&[1, 2]);
/// ```
pub struct TestObserver<T> {
    values: Mutex<Vec<T>>,
    errors: Mutex<Vec<RivuletError>>,
    completions: AtomicUsize,
    subscriptions: AtomicUsize,
    upstream: Mutex<Option<Arc<dyn Disposable>>>,
    cancelled: AtomicBool,
    terminated: AtomicBool,
    terminal_event: Event,
}

impl<T> TestObserver<T> {
    /// Create an observer with no recorded signals.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            completions: AtomicUsize::new(0),
            subscriptions: AtomicUsize::new(0),
            upstream: Mutex::new(None),
            cancelled: AtomicBool::new(false),
            terminated: AtomicBool::new(false),
            terminal_event: Event::new(),
        }
    }

    /// Snapshot of the values received so far.
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.lock().clone()
    }

    /// Number of `on_complete` signals received.
    #[must_use]
    pub fn completion_count(&self) -> usize {
        self.completions.load(Ordering::Acquire)
    }

    /// Number of `on_error` signals received.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.lock().len()
    }

    /// Number of `on_subscribe` calls received.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.load(Ordering::Acquire)
    }

    /// Display renderings of the received errors.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.lock().iter().map(ToString::to_string).collect()
    }

    /// Cancel the subscription through the capability received via
    /// `on_subscribe`.
    pub fn dispose(&self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(upstream) = self.upstream.lock().clone() {
            upstream.dispose();
        }
    }

    /// Whether [`dispose`](TestObserver::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Wait until a terminal signal (error or completion) has been recorded.
    ///
    /// Returns immediately if one already arrived. Pair with a runtime
    /// timeout to bound misbehaving tests.
    pub async fn await_terminal(&self) {
        loop {
            if self.terminated.load(Ordering::Acquire) {
                return;
            }
            let listener = self.terminal_event.listen();
            // Re-check after registering, the terminal signal may have won.
            if self.terminated.load(Ordering::Acquire) {
                return;
            }
            listener.await;
        }
    }

    /// Assert a successful outcome: exactly `expected` values, one
    /// completion, no error.
    pub fn assert_result(&self, expected: &[T])
    where
        T: PartialEq + Debug + Clone,
    {
        assert_eq!(self.values(), expected, "unexpected value sequence");
        assert_eq!(self.error_count(), 0, "unexpected error signal");
        assert_eq!(self.completion_count(), 1, "expected exactly one completion");
    }

    /// Assert a failed outcome: exactly `expected` values followed by one
    /// error and no completion.
    pub fn assert_failure(&self, expected: &[T])
    where
        T: PartialEq + Debug + Clone,
    {
        assert_eq!(self.values(), expected, "unexpected value sequence");
        assert_eq!(self.error_count(), 1, "expected exactly one error");
        assert_eq!(self.completion_count(), 0, "unexpected completion signal");
    }

    /// Assert that no terminal signal has been received yet.
    pub fn assert_not_terminated(&self) {
        assert_eq!(self.error_count(), 0, "unexpected error signal");
        assert_eq!(self.completion_count(), 0, "unexpected completion signal");
    }

    fn record_subscription(&self, disposable: Arc<dyn Disposable>) {
        self.subscriptions.fetch_add(1, Ordering::AcqRel);
        *self.upstream.lock() = Some(disposable.clone());
        // A dispose() that raced the subscription still has to cancel.
        if self.is_disposed() {
            disposable.dispose();
        }
    }

    fn record_error(&self, error: RivuletError) {
        self.errors.lock().push(error);
        self.terminated.store(true, Ordering::Release);
        self.terminal_event.notify(usize::MAX);
    }

    fn record_completion(&self) {
        self.completions.fetch_add(1, Ordering::AcqRel);
        self.terminated.store(true, Ordering::Release);
        self.terminal_event.notify(usize::MAX);
    }
}

impl<T> Default for TestObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> Observer<T> for TestObserver<T> {
    fn on_subscribe(&self, disposable: Arc<dyn Disposable>) {
        self.record_subscription(disposable);
    }

    fn on_next(&self, value: T) {
        self.values.lock().push(value);
    }

    fn on_error(&self, error: RivuletError) {
        self.record_error(error);
    }

    fn on_complete(&self) {
        self.record_completion();
    }
}

impl<T: Send + Sync> CompletableObserver for TestObserver<T> {
    fn on_subscribe(&self, disposable: Arc<dyn Disposable>) {
        self.record_subscription(disposable);
    }

    fn on_error(&self, error: RivuletError) {
        self.record_error(error);
    }

    fn on_complete(&self) {
        self.record_completion();
    }
}
