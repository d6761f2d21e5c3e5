// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cloneable handle to a value-emitting producer.

use rivulet_core::{BooleanDisposable, Disposable, Observer, ObservableSource, RivuletError};
use std::sync::Arc;

/// A value-emitting sequence.
///
/// `Observable<T>` wraps an [`ObservableSource`] behind an `Arc`, so handles
/// are cheap to clone and every [`subscribe`](Observable::subscribe) starts an
/// independent subscription. The synchronous constructors provided here emit
/// on the subscribing thread and honor the disposable they hand out between
/// emissions.
///
/// # Example
///
/// ```
/// use rivulet_observable::Observable;
/// use rivulet_test_utils::TestObserver;
/// use std::sync::Arc;
///
/// let observer = Arc::new(TestObserver::<i32>::new());
/// Observable::range(1, 3).subscribe(observer.clone());
/// observer.assert_result(&[1, 2, 3]);
/// ```
pub struct Observable<T> {
    source: Arc<dyn ObservableSource<T>>,
}

impl<T: Send + Sync + 'static> Observable<T> {
    /// Wrap an existing source.
    pub fn new(source: impl ObservableSource<T> + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Build a sequence from a subscribe function.
    ///
    /// The function is invoked once per subscription with the observer to
    /// drive. It is responsible for calling `on_subscribe` first and for
    /// honoring the observer protocol; nothing is enforced here, which also
    /// makes `create` the natural way to model non-conforming producers in
    /// tests.
    pub fn create<F>(on_subscribe: F) -> Self
    where
        F: Fn(Arc<dyn Observer<T>>) + Send + Sync + 'static,
    {
        Self::new(FnSource { on_subscribe })
    }

    /// A sequence that emits every item of `items`, then completes.
    pub fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        Self::new(IterSource {
            items: items.into_iter().collect(),
        })
    }

    /// A sequence that completes immediately without emitting.
    pub fn empty() -> Self {
        Self::create(|observer| {
            let disposable = Arc::new(BooleanDisposable::new());
            observer.on_subscribe(disposable.clone());
            if !disposable.is_disposed() {
                observer.on_complete();
            }
        })
    }

    /// A sequence that fails immediately with `error`.
    pub fn error(error: RivuletError) -> Self {
        Self::create(move |observer| {
            let disposable = Arc::new(BooleanDisposable::new());
            observer.on_subscribe(disposable.clone());
            if !disposable.is_disposed() {
                observer.on_error(error.clone());
            }
        })
    }

    /// Start one subscription, driving `observer` until a terminal signal or
    /// cancellation.
    pub fn subscribe(&self, observer: Arc<dyn Observer<T>>) {
        self.source.subscribe(observer);
    }
}

impl Observable<i32> {
    /// A sequence emitting `count` consecutive integers starting at `start`.
    pub fn range(start: i32, count: usize) -> Self {
        Self::from_iter((0..count).map(move |i| start + i as i32))
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

struct FnSource<F> {
    on_subscribe: F,
}

impl<T, F> ObservableSource<T> for FnSource<F>
where
    F: Fn(Arc<dyn Observer<T>>) + Send + Sync,
{
    fn subscribe(&self, observer: Arc<dyn Observer<T>>) {
        (self.on_subscribe)(observer);
    }
}

struct IterSource<T> {
    items: Vec<T>,
}

impl<T: Clone + Send + Sync> ObservableSource<T> for IterSource<T> {
    fn subscribe(&self, observer: Arc<dyn Observer<T>>) {
        let disposable = Arc::new(BooleanDisposable::new());
        observer.on_subscribe(disposable.clone());

        for item in &self.items {
            if disposable.is_disposed() {
                return;
            }
            observer.on_next(item.clone());
        }

        if !disposable.is_disposed() {
            observer.on_complete();
        }
    }
}
