// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rivulet observable sequences.
//!
//! This module provides the error handling system for all rivulet operations.
//! It defines a root [`RivuletError`] type with specific variants for different
//! failure modes, allowing library users to handle errors appropriately.
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{Result, RivuletError};
//!
//! fn process_data() -> Result<()> {
//!     // Operation that might fail
//!     Err(RivuletError::stream_error("Source not ready"))
//! }
//! ```

/// Root error type for all rivulet operations
///
/// This enum encompasses all possible error conditions that can occur
/// during subscription and signal delivery. An `on_error` signal carries
/// exactly one of these, forwarded verbatim to the downstream observer.
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// Signal processing encountered an error
    ///
    /// This is a general error for subscription-side failures that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// This wraps errors produced by user-provided actions and callbacks,
    /// allowing them to be propagated through the rivulet error system.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RivuletError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error indicates a permanent failure
    ///
    /// Errors delivered through `on_error` terminate the sequence, so every
    /// variant is currently permanent.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::StreamProcessingError { .. } | Self::UserError(_)
        )
    }
}

/// Specialized Result type for rivulet operations
///
/// This is a type alias for `std::result::Result<T, RivuletError>`, providing
/// a convenient shorthand for functions that return rivulet errors.
///
/// # Examples
///
/// ```
/// use rivulet_core::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, RivuletError>;

/// Extension trait for converting errors into `RivuletError`
///
/// This trait is automatically implemented for all types that implement
/// `std::error::Error + Send + Sync + 'static`, allowing easy conversion
/// to `RivuletError`.
pub trait IntoRivuletError {
    /// Convert this error into a `RivuletError`
    fn into_rivulet(self) -> RivuletError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRivuletError for E {
    fn into_rivulet(self) -> RivuletError {
        RivuletError::user_error(self)
    }
}

impl Clone for RivuletError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // For UserError, we can't clone the boxed error, so convert to string
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {}", e),
            },
        }
    }
}
