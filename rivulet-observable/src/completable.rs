// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cloneable handle to an action-only producer.

use rivulet_core::{
    BooleanDisposable, CompletableObserver, CompletableSource, CompletableSubject, Disposable,
    RivuletError,
};
use std::sync::Arc;

/// An action-only sequence: no values, exactly one terminal signal.
///
/// `Completable` wraps a [`CompletableSource`] behind an `Arc`; handles are
/// cheap to clone and every [`subscribe`](Completable::subscribe) starts an
/// independent subscription.
///
/// # Example
///
/// ```
/// use rivulet_observable::Completable;
/// use rivulet_test_utils::TestObserver;
/// use std::sync::Arc;
///
/// let observer = Arc::new(TestObserver::<i32>::new());
/// Completable::complete().subscribe(observer.clone());
/// assert_eq!(observer.completion_count(), 1);
/// ```
pub struct Completable {
    source: Arc<dyn CompletableSource>,
}

impl Completable {
    /// Wrap an existing source.
    pub fn new(source: impl CompletableSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Build a task from a subscribe function.
    ///
    /// Like [`Observable::create`](crate::Observable::create), nothing is
    /// enforced about the function's conformance to the observer protocol,
    /// which makes this the natural way to model non-conforming tasks in
    /// tests.
    pub fn create<F>(on_subscribe: F) -> Self
    where
        F: Fn(Arc<dyn CompletableObserver>) + Send + Sync + 'static,
    {
        Self::new(FnCompletableSource { on_subscribe })
    }

    /// A task that completes immediately.
    pub fn complete() -> Self {
        Self::new(CompleteSource)
    }

    /// A task that fails immediately with `error`.
    pub fn error(error: RivuletError) -> Self {
        Self::new(ErrorSource { error })
    }

    /// A task that runs `action` on the subscribing thread.
    ///
    /// The action runs after `on_subscribe`, and only if the subscription has
    /// not already been cancelled. `Ok(())` becomes `on_complete`, `Err`
    /// becomes `on_error`; either terminal signal is suppressed if the
    /// subscription was cancelled while the action ran.
    pub fn from_action<F>(action: F) -> Self
    where
        F: Fn() -> Result<(), RivuletError> + Send + Sync + 'static,
    {
        Self::new(ActionSource { action })
    }

    /// A task backed by a spawned future.
    ///
    /// The future is spawned on the ambient tokio runtime at subscription
    /// time; disposing the subscription aborts it. The future is one-shot: a
    /// second subscription fails with a stream error.
    #[cfg(feature = "runtime-tokio")]
    pub fn from_future<F>(future: F) -> Self
    where
        F: std::future::Future<Output = Result<(), RivuletError>> + Send + 'static,
    {
        Self::new(future_source::FutureSource::new(future))
    }

    /// Start one subscription, driving `observer` to its terminal signal.
    pub fn subscribe(&self, observer: Arc<dyn CompletableObserver>) {
        self.source.subscribe(observer);
    }
}

impl Clone for Completable {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl From<CompletableSubject> for Completable {
    fn from(subject: CompletableSubject) -> Self {
        Self::new(subject)
    }
}

struct FnCompletableSource<F> {
    on_subscribe: F,
}

impl<F> CompletableSource for FnCompletableSource<F>
where
    F: Fn(Arc<dyn CompletableObserver>) + Send + Sync,
{
    fn subscribe(&self, observer: Arc<dyn CompletableObserver>) {
        (self.on_subscribe)(observer);
    }
}

struct CompleteSource;

impl CompletableSource for CompleteSource {
    fn subscribe(&self, observer: Arc<dyn CompletableObserver>) {
        let disposable = Arc::new(BooleanDisposable::new());
        observer.on_subscribe(disposable.clone());
        if !disposable.is_disposed() {
            observer.on_complete();
        }
    }
}

struct ErrorSource {
    error: RivuletError,
}

impl CompletableSource for ErrorSource {
    fn subscribe(&self, observer: Arc<dyn CompletableObserver>) {
        let disposable = Arc::new(BooleanDisposable::new());
        observer.on_subscribe(disposable.clone());
        if !disposable.is_disposed() {
            observer.on_error(self.error.clone());
        }
    }
}

struct ActionSource<F> {
    action: F,
}

impl<F> CompletableSource for ActionSource<F>
where
    F: Fn() -> Result<(), RivuletError> + Send + Sync,
{
    fn subscribe(&self, observer: Arc<dyn CompletableObserver>) {
        let disposable = Arc::new(BooleanDisposable::new());
        observer.on_subscribe(disposable.clone());
        if disposable.is_disposed() {
            return;
        }

        let outcome = (self.action)();

        if disposable.is_disposed() {
            return;
        }
        match outcome {
            Ok(()) => observer.on_complete(),
            Err(error) => observer.on_error(error),
        }
    }
}

#[cfg(feature = "runtime-tokio")]
mod future_source {
    use super::*;
    use core::sync::atomic::{AtomicBool, Ordering};
    use parking_lot::Mutex;
    use std::future::Future;
    use tokio::task::JoinHandle;

    pub(super) struct FutureSource<F> {
        future: Mutex<Option<F>>,
    }

    impl<F> FutureSource<F> {
        pub(super) fn new(future: F) -> Self {
            Self {
                future: Mutex::new(Some(future)),
            }
        }
    }

    impl<F> CompletableSource for FutureSource<F>
    where
        F: Future<Output = Result<(), RivuletError>> + Send + 'static,
    {
        fn subscribe(&self, observer: Arc<dyn CompletableObserver>) {
            let Some(future) = self.future.lock().take() else {
                let disposable = Arc::new(BooleanDisposable::new());
                observer.on_subscribe(disposable.clone());
                if !disposable.is_disposed() {
                    observer.on_error(RivuletError::stream_error(
                        "future-backed task already consumed",
                    ));
                }
                return;
            };

            let task = Arc::new(TaskDisposable::new());
            observer.on_subscribe(task.clone());

            let signal = task.clone();
            let handle = tokio::spawn(async move {
                let outcome = future.await;
                if signal.is_disposed() {
                    return;
                }
                match outcome {
                    Ok(()) => observer.on_complete(),
                    Err(error) => observer.on_error(error),
                }
            });
            task.attach(handle);
        }
    }

    // Aborts the spawned task on dispose; signals are additionally suppressed
    // through the disposed flag in case the future finishes concurrently.
    struct TaskDisposable {
        disposed: AtomicBool,
        handle: Mutex<Option<JoinHandle<()>>>,
    }

    impl TaskDisposable {
        fn new() -> Self {
            Self {
                disposed: AtomicBool::new(false),
                handle: Mutex::new(None),
            }
        }

        fn attach(&self, handle: JoinHandle<()>) {
            *self.handle.lock() = Some(handle);
            // A dispose between spawn and attach would have found the slot
            // empty; re-check so the task never outlives its cancellation.
            if self.is_disposed() {
                if let Some(handle) = self.handle.lock().take() {
                    handle.abort();
                }
            }
        }
    }

    impl Disposable for TaskDisposable {
        fn dispose(&self) {
            if self
                .disposed
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                if let Some(handle) = self.handle.lock().take() {
                    handle.abort();
                }
            }
        }

        fn is_disposed(&self) -> bool {
            self.disposed.load(Ordering::Acquire)
        }
    }
}
