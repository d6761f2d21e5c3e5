// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-slot disposable container with dispose-on-replace semantics.

use crate::Disposable;
use core::sync::atomic::{AtomicBool, Ordering};
use parking_lot::Mutex;
use std::sync::Arc;

/// A disposable slot holding at most one live resource at a time.
///
/// `SerialDisposable` is the coordination point between an operator that
/// switches from one producer subscription to the next and a downstream that
/// may cancel at any moment:
///
/// - [`install`](SerialDisposable::install) stores a new resource and
///   disposes the previously held one as part of the same step, so two
///   resources are never live simultaneously.
/// - [`dispose`](SerialDisposable::dispose) is terminal: it releases the
///   current resource and causes every subsequently installed resource to be
///   disposed immediately, before `install` returns.
///
/// Producer callbacks are serialized by the subscription contract, so the
/// only genuine race is a downstream `dispose` arriving from another thread
/// while an `install` is in flight. That race is resolved with a single
/// compare-and-set on the terminal flag plus a re-check after the slot swap;
/// whichever side loses drains the slot, and `Option::take` guarantees the
/// stored resource is disposed exactly once.
///
/// # Example
///
/// ```
/// use rivulet_core::{BooleanDisposable, Disposable, SerialDisposable};
/// use std::sync::Arc;
///
/// let slot = SerialDisposable::new();
///
/// let first = Arc::new(BooleanDisposable::new());
/// slot.install(first.clone());
///
/// // Installing a replacement releases the previous resource.
/// let second = Arc::new(BooleanDisposable::new());
/// slot.install(second.clone());
/// assert!(first.is_disposed());
/// assert!(!second.is_disposed());
///
/// // Disposing is terminal: the slot empties and stays dead.
/// slot.dispose();
/// assert!(second.is_disposed());
///
/// let late = Arc::new(BooleanDisposable::new());
/// slot.install(late.clone());
/// assert!(late.is_disposed());
/// ```
#[derive(Default)]
pub struct SerialDisposable {
    terminal: AtomicBool,
    slot: Mutex<Option<Arc<dyn Disposable>>>,
}

impl SerialDisposable {
    /// Create an empty, non-terminal slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terminal: AtomicBool::new(false),
            slot: Mutex::new(None),
        }
    }

    /// Store `resource` as the current resource, disposing the previous one.
    ///
    /// If the slot is already terminal, `resource` is disposed immediately
    /// and synchronously instead of being stored.
    pub fn install(&self, resource: Arc<dyn Disposable>) {
        if self.terminal.load(Ordering::Acquire) {
            resource.dispose();
            return;
        }

        let previous = self.slot.lock().replace(resource);

        // A concurrent dispose() may have missed the resource we just stored.
        // Re-check and drain so nothing stays live past the terminal flag.
        if self.terminal.load(Ordering::Acquire) {
            if let Some(current) = self.slot.lock().take() {
                current.dispose();
            }
        }

        if let Some(previous) = previous {
            previous.dispose();
        }
    }
}

impl Disposable for SerialDisposable {
    /// Mark the slot terminal and release the current resource.
    ///
    /// Idempotent: the terminal transition happens once, and `Option::take`
    /// ensures the stored resource is never double-disposed.
    fn dispose(&self) {
        if self
            .terminal
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        if let Some(current) = self.slot.lock().take() {
            current.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.terminal.load(Ordering::Acquire)
    }
}
