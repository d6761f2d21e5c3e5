// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error injection type for operator tests.

use rivulet_core::RivuletError;

/// A distinguishable error for asserting error propagation paths.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("test error: {0}")]
pub struct TestError(pub &'static str);

/// A ready-made injected [`RivuletError`] wrapping [`TestError`].
pub fn test_error(tag: &'static str) -> RivuletError {
    RivuletError::user_error(TestError(tag))
}
