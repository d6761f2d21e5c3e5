// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Callback targets for push-based producers.

use crate::{Disposable, RivuletError};
use std::sync::Arc;

/// Receiver side of a value-emitting subscription.
///
/// A conforming producer invokes, in order: `on_subscribe` exactly once,
/// then zero or more `on_next` calls, then exactly one terminal signal
/// (`on_error` or `on_complete`), and nothing afterwards. Callbacks from a
/// single producer are never invoked concurrently with each other.
///
/// Methods take `&self` because one observer may be shared between the
/// downstream and a producer running on another thread; implementations keep
/// their mutable state behind interior mutability.
pub trait Observer<T>: Send + Sync {
    /// Called first, carrying the cancellation capability for this
    /// subscription.
    fn on_subscribe(&self, disposable: Arc<dyn Disposable>);

    /// Called for each emitted value.
    fn on_next(&self, value: T);

    /// Terminal signal: the sequence failed.
    fn on_error(&self, error: RivuletError);

    /// Terminal signal: the sequence finished successfully.
    fn on_complete(&self);
}

/// Receiver side of an action-only subscription.
///
/// Identical to [`Observer`] minus `on_next`: a completable producer emits
/// no values, only `on_subscribe` followed by exactly one terminal signal.
pub trait CompletableObserver: Send + Sync {
    /// Called first, carrying the cancellation capability for this
    /// subscription.
    fn on_subscribe(&self, disposable: Arc<dyn Disposable>);

    /// Terminal signal: the task failed.
    fn on_error(&self, error: RivuletError);

    /// Terminal signal: the task finished successfully.
    fn on_complete(&self);
}
