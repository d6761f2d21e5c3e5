// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator - limits a sequence to its first n values.
//!
//! The `take` operator forwards the first `n` values of the source, then
//! disposes the upstream subscription and completes the downstream with a
//! synthetic completion. The source's own terminal signal, if it arrives
//! later anyway, is discarded.
//!
//! # Arguments
//!
//! * `n` - The maximum number of values to emit. `take(0)` completes
//!   immediately without subscribing upstream.
//!
//! # Returns
//!
//! A new observable that emits at most `n` values from the source.
//!
//! # Error Handling
//!
//! An upstream error arriving before the limit is reached is forwarded
//! verbatim; after the limit (or after downstream cancellation) it is
//! discarded along with every other signal.
//!
//! # Examples
//!
//! ```rust
//! use rivulet_observable::{Observable, TakeExt};
//! use rivulet_test_utils::TestObserver;
//! use std::sync::Arc;
//!
//! let observer = Arc::new(TestObserver::<i32>::new());
//! Observable::range(1, 5).take(3).subscribe(observer.clone());
//! observer.assert_result(&[1, 2, 3]);
//! ```
//!
//! # See Also
//!
//! - [`ConcatWithExt::concat_with`](crate::ConcatWithExt::concat_with) - Append a trailing completable

mod implementation;

pub use implementation::TakeExt;
