// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concat-with operator - runs a trailing completable after the source.
//!
//! The `concat_with` operator chains an [`Observable`](crate::Observable)
//! with an action-only [`Completable`](crate::Completable): every value of
//! the source is forwarded downstream, then the completable is subscribed,
//! and only its terminal signal completes the composed sequence.
//!
//! # Returns
//!
//! A new observable emitting the source's values followed by the
//! completable's terminal signal.
//!
//! # Error Handling
//!
//! Errors terminate the composition at the point where they occur:
//!
//! - A source error is forwarded verbatim and the completable is **never**
//!   subscribed.
//! - A completable error is forwarded verbatim; values already emitted by
//!   the source stay delivered.
//!
//! No wrapping, no retries: whichever producer failed, the composition stops
//! and reports that error, exactly once.
//!
//! # Cancellation
//!
//! The composed sequence exposes a single cancellation capability, handed to
//! the downstream before the source is subscribed. Disposing it cancels
//! whichever producer is currently in flight and suppresses every further
//! signal, including the completable's side effect when cancellation lands
//! before the hand-over.
//!
//! # Protocol Robustness
//!
//! The operator keeps exactly one producer resource live at a time and
//! defends against non-conforming producers: a duplicate `on_subscribe` from
//! the active producer is neutralized (the second resource is disposed, the
//! first stays in place), and any signal arriving after the composed
//! sequence terminated is discarded.
//!
//! # Examples
//!
//! ```rust
//! use rivulet_observable::{Completable, ConcatWithExt, Observable};
//! use rivulet_test_utils::TestObserver;
//! use rivulet_core::Observer;
//! use std::sync::Arc;
//!
//! let observer = Arc::new(TestObserver::<i32>::new());
//! let side_effect = observer.clone();
//!
//! Observable::range(1, 5)
//!     .concat_with(Completable::from_action(move || {
//!         side_effect.on_next(100);
//!         Ok(())
//!     }))
//!     .subscribe(observer.clone());
//!
//! observer.assert_result(&[1, 2, 3, 4, 5, 100]);
//! ```
//!
//! # See Also
//!
//! - [`TakeExt::take`](crate::TakeExt::take) - Truncate the composed sequence

mod implementation;

pub use implementation::ConcatWithExt;
