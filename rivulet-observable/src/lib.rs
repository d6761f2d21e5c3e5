// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-based observable sequences with sequential composition.
//!
//! This crate provides the [`Observable`] and [`Completable`] wrapper types
//! and the operators that compose them. The centerpiece is
//! [`concat_with`](ConcatWithExt::concat_with), which chains a value-emitting
//! observable with a trailing action-only completable: the observable runs to
//! completion, then the completable runs, and only after both finish does the
//! downstream observer see completion.
//!
//! # Architecture
//!
//! - **[`Observable<T>`]**: a cloneable handle to a value-emitting producer,
//!   with constructors for the common synchronous sources.
//! - **[`Completable`]**: a cloneable handle to an action-only producer —
//!   one terminal signal, no values.
//! - **Extension traits**: each operator is provided via an extension trait
//!   for composability.
//! - **Disposables**: every subscription hands the downstream a cancellation
//!   capability; operators route producer resources through a
//!   [`SerialDisposable`](rivulet_core::SerialDisposable) so at most one
//!   producer is live at a time.
//!
//! # Basic Usage
//!
//! ```
//! use rivulet_observable::{ConcatWithExt, Completable, Observable, Observer};
//! use rivulet_test_utils::TestObserver;
//! use std::sync::Arc;
//!
//! let observer = Arc::new(TestObserver::<i32>::new());
//! let side_effect = observer.clone();
//!
//! Observable::range(1, 3)
//!     .concat_with(Completable::from_action(move || {
//!         side_effect.on_next(100);
//!         Ok(())
//!     }))
//!     .subscribe(observer.clone());
//!
//! observer.assert_result(&[1, 2, 3, 100]);
//! ```
//!
//! # Error Handling
//!
//! Errors terminate a sequence: the first `on_error` from whichever producer
//! is active is forwarded verbatim downstream, exactly once. An error from
//! the primary observable means the trailing completable is never subscribed.
//!
//! # Cancellation
//!
//! Disposing the capability received through `on_subscribe` cancels whichever
//! producer is currently in flight and suppresses all further signals. The
//! capability is handed to the downstream *before* the upstream subscription
//! is made, so cancellation works even against sources that emit
//! synchronously during subscribe.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod completable;
pub mod concat_with;
pub mod observable;
pub mod take;

// Re-export commonly used types
pub use completable::Completable;
pub use concat_with::ConcatWithExt;
pub use observable::Observable;
pub use rivulet_core::{
    BooleanDisposable, CompletableObserver, CompletableSource, CompletableSubject, Disposable,
    Observer, ObservableSource, RivuletError, SerialDisposable,
};
pub use take::TakeExt;
