// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the rivulet workspace.
//!
//! Provides the recording [`TestObserver`], a dispose-counting
//! [`CountingDisposable`] and the [`TestError`] injection type used across
//! the operator test suites.

pub mod counting_disposable;
pub mod test_error;
pub mod test_observer;

pub use counting_disposable::CountingDisposable;
pub use test_error::{test_error, TestError};
pub use test_observer::TestObserver;
