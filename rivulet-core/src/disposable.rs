// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation capability attached to one producer subscription.

use core::sync::atomic::{AtomicBool, Ordering};

/// A resource handle that can be released exactly once.
///
/// Every subscription hands its observer a `Disposable` through
/// `on_subscribe`. Calling [`dispose`](Disposable::dispose) requests
/// cancellation of the associated producer; after that, the producer must
/// stop signalling.
///
/// Implementations must be idempotent: disposing an already-disposed handle
/// has no additional effect.
pub trait Disposable: Send + Sync {
    /// Release the resource. Idempotent.
    fn dispose(&self);

    /// Returns `true` once [`dispose`](Disposable::dispose) has been called.
    fn is_disposed(&self) -> bool;
}

/// The trivial stateful [`Disposable`]: a single atomic flag.
///
/// Producers that hold no real resource hand one of these out so that the
/// downstream still has a working cancellation capability, and tests use it
/// to observe whether an operator released a subscription.
///
/// # Example
///
/// ```
/// use rivulet_core::{BooleanDisposable, Disposable};
///
/// let d = BooleanDisposable::new();
/// assert!(!d.is_disposed());
///
/// d.dispose();
/// d.dispose(); // idempotent
/// assert!(d.is_disposed());
/// ```
#[derive(Debug, Default)]
pub struct BooleanDisposable {
    disposed: AtomicBool,
}

impl BooleanDisposable {
    /// Create a new, not-yet-disposed handle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            disposed: AtomicBool::new(false),
        }
    }
}

impl Disposable for BooleanDisposable {
    fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}
