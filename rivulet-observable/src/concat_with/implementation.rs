// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Completable, Observable};
use core::sync::atomic::{AtomicBool, Ordering};
use parking_lot::Mutex;
use rivulet_core::{
    CompletableObserver, Disposable, Observer, ObservableSource, RivuletError, SerialDisposable,
};
use std::sync::{Arc, Weak};

/// Extension trait providing the `concat_with` operator for observables.
pub trait ConcatWithExt<T> {
    /// Runs `other` after this sequence completes, completing the composed
    /// sequence only once both have finished.
    ///
    /// See the [module-level documentation](crate::concat_with) for detailed
    /// semantics, error handling and cancellation behavior.
    fn concat_with(self, other: Completable) -> Observable<T>;
}

impl<T: Send + Sync + 'static> ConcatWithExt<T> for Observable<T> {
    fn concat_with(self, other: Completable) -> Observable<T> {
        Observable::new(ConcatWithCompletable {
            source: self,
            other,
        })
    }
}

struct ConcatWithCompletable<T> {
    source: Observable<T>,
    other: Completable,
}

impl<T: Send + Sync + 'static> ObservableSource<T> for ConcatWithCompletable<T> {
    fn subscribe(&self, observer: Arc<dyn Observer<T>>) {
        // The bridge hands its cancellation capability downstream before the
        // source is subscribed, so the downstream can cancel even against a
        // source that emits synchronously during subscribe.
        let bridge = ConcatBridge::attach(observer, self.other.clone());
        self.source.subscribe(bridge);
    }
}

/// Which producer the bridge currently interprets callbacks for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    AwaitingPrimary,
    AwaitingSecondary,
    Done,
}

/// The single callback target for whichever producer is active.
///
/// One bridge serves the whole composition: it is registered as the observer
/// of the source, then re-registered as the observer of the completable. The
/// phase tag is checked at the top of every handler, so the meaning of each
/// callback follows the state machine rather than the identity of the
/// registered object.
///
/// The bridge owns one [`SerialDisposable`], which always mirrors the
/// producer in flight: the source's resource is installed first, then
/// replaced (and thereby released) by the completable's resource on
/// hand-over, and emptied for good on termination or downstream cancellation.
struct ConcatBridge<T> {
    downstream: Arc<dyn Observer<T>>,
    other: Completable,
    handle: Arc<SerialDisposable>,
    phase: Mutex<Phase>,
    /// Set-once guard for the producer currently subscribing; reset on the
    /// primary-to-secondary hand-over.
    installed: AtomicBool,
    /// Back-reference used to re-register the bridge with the completable.
    this: Mutex<Weak<ConcatBridge<T>>>,
}

impl<T: Send + Sync + 'static> ConcatBridge<T> {
    fn attach(downstream: Arc<dyn Observer<T>>, other: Completable) -> Arc<Self> {
        let bridge = Arc::new(Self {
            downstream,
            other,
            handle: Arc::new(SerialDisposable::new()),
            phase: Mutex::new(Phase::AwaitingPrimary),
            installed: AtomicBool::new(false),
            this: Mutex::new(Weak::new()),
        });
        *bridge.this.lock() = Arc::downgrade(&bridge);
        bridge.downstream.on_subscribe(bridge.handle.clone());
        bridge
    }

    /// Install a producer resource, neutralizing duplicate `on_subscribe`
    /// calls: only the first resource per producer is kept, any further one
    /// is disposed immediately and the first stays untouched.
    fn install(&self, disposable: Arc<dyn Disposable>) {
        if self.installed.swap(true, Ordering::AcqRel) {
            warn!("concat_with: duplicate on_subscribe from producer, disposing extra resource");
            disposable.dispose();
        } else {
            self.handle.install(disposable);
        }
    }

    fn forward_value(&self, value: T) {
        if *self.phase.lock() != Phase::AwaitingPrimary || self.handle.is_disposed() {
            return;
        }
        self.downstream.on_next(value);
    }

    fn forward_error(&self, error: RivuletError) {
        {
            let mut phase = self.phase.lock();
            if *phase == Phase::Done {
                info!("concat_with: discarding post-terminal error: {}", error);
                return;
            }
            *phase = Phase::Done;
        }
        if !self.handle.is_disposed() {
            self.downstream.on_error(error);
        }
        self.handle.dispose();
    }

    fn forward_completion(&self) {
        let completed_phase = {
            let mut phase = self.phase.lock();
            match *phase {
                Phase::Done => {
                    info!("concat_with: discarding post-terminal completion");
                    return;
                }
                Phase::AwaitingPrimary => {
                    *phase = Phase::AwaitingSecondary;
                    Phase::AwaitingPrimary
                }
                Phase::AwaitingSecondary => {
                    *phase = Phase::Done;
                    Phase::AwaitingSecondary
                }
            }
        };

        match completed_phase {
            Phase::AwaitingPrimary => {
                // Cancellation before the hand-over: the completable must
                // never start.
                if self.handle.is_disposed() {
                    return;
                }
                // The completable's on_subscribe replaces the finished
                // source's resource in the serial slot, releasing it.
                self.installed.store(false, Ordering::Release);

                // No lock may be held here: the completable can signal back
                // into this bridge synchronously.
                let me = self.this.lock().upgrade();
                if let Some(me) = me {
                    self.other.subscribe(me as Arc<dyn CompletableObserver>);
                }
            }
            _ => {
                if !self.handle.is_disposed() {
                    self.downstream.on_complete();
                }
                self.handle.dispose();
            }
        }
    }
}

impl<T: Send + Sync + 'static> Observer<T> for ConcatBridge<T> {
    fn on_subscribe(&self, disposable: Arc<dyn Disposable>) {
        self.install(disposable);
    }

    fn on_next(&self, value: T) {
        self.forward_value(value);
    }

    fn on_error(&self, error: RivuletError) {
        self.forward_error(error);
    }

    fn on_complete(&self) {
        self.forward_completion();
    }
}

impl<T: Send + Sync + 'static> CompletableObserver for ConcatBridge<T> {
    fn on_subscribe(&self, disposable: Arc<dyn Disposable>) {
        self.install(disposable);
    }

    fn on_error(&self, error: RivuletError) {
        self.forward_error(error);
    }

    fn on_complete(&self) {
        self.forward_completion();
    }
}
