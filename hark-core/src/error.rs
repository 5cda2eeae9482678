//! Error types for hark.
//!
//! Registration is the only fallible operation on an emitter, so the
//! hierarchy is flat: a single [`EmitterError`] enum built with `thiserror`.

use thiserror::Error;

/// A `Result` alias using [`EmitterError`].
pub type Result<T, E = EmitterError> = std::result::Result<T, E>;

/// Errors returned by emitter registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EmitterError {
    /// The event already holds the configured maximum number of listeners.
    #[error("max listeners exceeded for event: {event} (limit {limit})")]
    LimitExceeded {
        /// The event that rejected the registration.
        event: String,
        /// The configured per-event limit.
        limit: usize,
    },
}

impl EmitterError {
    /// Create a [`EmitterError::LimitExceeded`] for `event`.
    pub fn limit_exceeded(event: impl Into<String>, limit: usize) -> Self {
        EmitterError::LimitExceeded {
            event: event.into(),
            limit,
        }
    }

    /// The event name this error refers to.
    pub fn event(&self) -> &str {
        match self {
            EmitterError::LimitExceeded { event, .. } => event,
        }
    }
}
