// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposable that records how often it was disposed.

use core::sync::atomic::{AtomicUsize, Ordering};
use rivulet_core::Disposable;

/// A [`Disposable`] counting every `dispose` call.
///
/// Used to verify exactly-once disposal guarantees: unlike
/// [`BooleanDisposable`](rivulet_core::BooleanDisposable), it can tell a
/// single disposal apart from an (incorrect) double disposal.
#[derive(Debug, Default)]
pub struct CountingDisposable {
    dispose_calls: AtomicUsize,
}

impl CountingDisposable {
    /// Create a new, not-yet-disposed counter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dispose_calls: AtomicUsize::new(0),
        }
    }

    /// How many times `dispose` has been called.
    #[must_use]
    pub fn dispose_calls(&self) -> usize {
        self.dispose_calls.load(Ordering::Acquire)
    }
}

impl Disposable for CountingDisposable {
    fn dispose(&self) {
        self.dispose_calls.fetch_add(1, Ordering::AcqRel);
    }

    fn is_disposed(&self) -> bool {
        self.dispose_calls() > 0
    }
}
