// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Observable;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use rivulet_core::{
    BooleanDisposable, Disposable, Observer, ObservableSource, RivuletError, SerialDisposable,
};
use std::sync::Arc;

/// Extension trait providing the `take` operator for observables.
pub trait TakeExt<T> {
    /// Emits only the first `n` values from the sequence, then completes.
    ///
    /// The upstream subscription is disposed as soon as the limit is
    /// reached, before the synthetic completion is forwarded.
    ///
    /// See the [module-level documentation](crate::take) for detailed
    /// examples and usage patterns.
    fn take(self, n: usize) -> Observable<T>;
}

impl<T: Send + Sync + 'static> TakeExt<T> for Observable<T> {
    fn take(self, n: usize) -> Observable<T> {
        Observable::new(TakeObservable { source: self, n })
    }
}

struct TakeObservable<T> {
    source: Observable<T>,
    n: usize,
}

impl<T: Send + Sync + 'static> ObservableSource<T> for TakeObservable<T> {
    fn subscribe(&self, observer: Arc<dyn Observer<T>>) {
        if self.n == 0 {
            let disposable = Arc::new(BooleanDisposable::new());
            observer.on_subscribe(disposable.clone());
            if !disposable.is_disposed() {
                observer.on_complete();
            }
            return;
        }

        let take = Arc::new(TakeObserver {
            downstream: observer,
            remaining: AtomicUsize::new(self.n),
            handle: Arc::new(SerialDisposable::new()),
            done: AtomicBool::new(false),
        });
        take.downstream.on_subscribe(take.handle.clone());
        self.source.subscribe(take);
    }
}

struct TakeObserver<T> {
    downstream: Arc<dyn Observer<T>>,
    remaining: AtomicUsize,
    handle: Arc<SerialDisposable>,
    done: AtomicBool,
}

impl<T: Send + Sync + 'static> Observer<T> for TakeObserver<T> {
    fn on_subscribe(&self, disposable: Arc<dyn Disposable>) {
        self.handle.install(disposable);
    }

    fn on_next(&self, value: T) {
        if self.done.load(Ordering::Acquire) || self.handle.is_disposed() {
            return;
        }
        self.downstream.on_next(value);

        if self.remaining.fetch_sub(1, Ordering::AcqRel) == 1 {
            // Limit reached: cancel upstream first, then complete downstream.
            self.done.store(true, Ordering::Release);
            self.handle.dispose();
            self.downstream.on_complete();
        }
    }

    fn on_error(&self, error: RivuletError) {
        if self.done.swap(true, Ordering::AcqRel) {
            info!("take: discarding post-terminal error: {}", error);
            return;
        }
        if !self.handle.is_disposed() {
            self.downstream.on_error(error);
        }
        self.handle.dispose();
    }

    fn on_complete(&self) {
        if self.done.swap(true, Ordering::AcqRel) {
            return;
        }
        if !self.handle.is_disposed() {
            self.downstream.on_complete();
        }
        self.handle.dispose();
    }
}
