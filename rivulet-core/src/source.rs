// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Producer side of the subscription contract.

use crate::{CompletableObserver, Observer};
use std::sync::Arc;

/// A value-emitting producer.
///
/// `subscribe` must call `observer.on_subscribe` before any other signal and
/// then honor the [`Observer`] protocol: zero or more values followed by
/// exactly one terminal signal, with cancellation requested through the
/// disposable it handed out.
pub trait ObservableSource<T>: Send + Sync {
    /// Begin one subscription, driving `observer` to completion.
    fn subscribe(&self, observer: Arc<dyn Observer<T>>);
}

/// An action-only producer: no values, exactly one terminal signal.
pub trait CompletableSource: Send + Sync {
    /// Begin one subscription, driving `observer` to its terminal signal.
    fn subscribe(&self, observer: Arc<dyn CompletableObserver>);
}
