// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-observer completable driven by hand.
//!
//! A [`CompletableSubject`] is an action-only producer whose terminal signal
//! is triggered explicitly through [`on_complete`](CompletableSubject::on_complete)
//! or [`on_error`](CompletableSubject::on_error).
//!
//! ## Characteristics
//!
//! - **Hot**: observers subscribed before the terminal signal all receive it;
//!   late observers receive the terminal signal immediately on subscription.
//! - **Thread-safe**: cheap to clone; all clones share the same state.
//! - **Cancellation-aware**: each observer gets its own disposable, and
//!   disposed observers are dropped from the live set.
//!
//! ## Example
//!
//! ```
//! use rivulet_core::CompletableSubject;
//!
//! let subject = CompletableSubject::new();
//! assert!(!subject.has_observers());
//! assert!(!subject.is_terminated());
//!
//! subject.on_complete();
//! assert!(subject.is_terminated());
//! ```

use crate::{BooleanDisposable, CompletableObserver, CompletableSource, Disposable, RivuletError};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone)]
enum Terminal {
    Complete,
    Error(RivuletError),
}

struct Entry {
    observer: Arc<dyn CompletableObserver>,
    disposable: Arc<BooleanDisposable>,
}

struct SubjectState {
    terminal: Option<Terminal>,
    entries: Vec<Entry>,
}

/// A hot completable that broadcasts its terminal signal to all current
/// observers.
///
/// `CompletableSubject` is the entry point for driving an action-only
/// sequence by hand, typically to control exactly when a trailing task
/// finishes relative to other events.
///
/// See the [module documentation](self) for details.
pub struct CompletableSubject {
    state: Arc<Mutex<SubjectState>>,
}

impl CompletableSubject {
    /// Creates a new subject with no observers and no terminal signal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                terminal: None,
                entries: Vec::new(),
            })),
        }
    }

    /// Terminate the subject successfully, signalling all live observers.
    ///
    /// Idempotent: only the first terminal signal is delivered.
    pub fn on_complete(&self) {
        if let Some(entries) = self.terminate(Terminal::Complete) {
            for entry in entries {
                if !entry.disposable.is_disposed() {
                    entry.observer.on_complete();
                }
            }
        }
    }

    /// Terminate the subject with `error`, signalling all live observers.
    ///
    /// Idempotent: only the first terminal signal is delivered.
    pub fn on_error(&self, error: RivuletError) {
        if let Some(entries) = self.terminate(Terminal::Error(error.clone())) {
            for entry in entries {
                if !entry.disposable.is_disposed() {
                    entry.observer.on_error(error.clone());
                }
            }
        }
    }

    /// Returns `true` if at least one non-disposed observer is subscribed.
    ///
    /// Disposed observers are pruned lazily by this call.
    #[must_use]
    pub fn has_observers(&self) -> bool {
        let mut state = self.state.lock();
        state.entries.retain(|e| !e.disposable.is_disposed());
        !state.entries.is_empty()
    }

    /// Returns `true` once the subject has received its terminal signal.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    // Install the terminal signal and drain the observer list, or None if a
    // terminal signal was already installed. Observers are signalled outside
    // the lock.
    fn terminate(&self, terminal: Terminal) -> Option<Vec<Entry>> {
        let mut state = self.state.lock();
        if state.terminal.is_some() {
            return None;
        }
        state.terminal = Some(terminal);
        Some(std::mem::take(&mut state.entries))
    }
}

impl CompletableSource for CompletableSubject {
    fn subscribe(&self, observer: Arc<dyn CompletableObserver>) {
        let disposable = Arc::new(BooleanDisposable::new());
        observer.on_subscribe(disposable.clone());

        let replay = {
            let mut state = self.state.lock();
            match &state.terminal {
                Some(terminal) => Some(terminal.clone()),
                None => {
                    state.entries.push(Entry {
                        observer: observer.clone(),
                        disposable,
                    });
                    None
                }
            }
        };

        match replay {
            Some(Terminal::Complete) => observer.on_complete(),
            Some(Terminal::Error(error)) => observer.on_error(error),
            None => {}
        }
    }
}

impl Default for CompletableSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CompletableSubject {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
