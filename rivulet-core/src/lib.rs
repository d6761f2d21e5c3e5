// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core traits and types for push-based observable composition.
//!
//! This crate defines the vocabulary the `rivulet` operators are built from:
//!
//! - [`Disposable`]: the cancellation capability attached to one producer
//!   subscription, with [`BooleanDisposable`] as the trivial implementation.
//! - [`SerialDisposable`]: a single-slot holder that keeps at most one
//!   disposable live at a time, with dispose-on-replace and terminal-forever
//!   semantics.
//! - [`Observer`] / [`CompletableObserver`]: the callback targets producers
//!   signal into.
//! - [`ObservableSource`] / [`CompletableSource`]: the producer sides of the
//!   subscription contract.
//! - [`CompletableSubject`]: a hot, multi-observer completable used to drive
//!   action-only sequences by hand.
//! - [`RivuletError`]: the root error type flowing through `on_error`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod completable_subject;
pub mod disposable;
pub mod error;
pub mod observer;
pub mod serial_disposable;
pub mod source;

pub use self::completable_subject::CompletableSubject;
pub use self::disposable::{BooleanDisposable, Disposable};
pub use self::error::{IntoRivuletError, Result, RivuletError};
pub use self::observer::{CompletableObserver, Observer};
pub use self::serial_disposable::SerialDisposable;
pub use self::source::{CompletableSource, ObservableSource};
