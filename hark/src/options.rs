//! Construction-time configuration for [`Emitter`].
//!
//! [`Emitter`]: crate::Emitter

use crate::Emitter;
use hark_core::Message;
use std::{fmt, marker::PhantomData, num::NonZeroUsize};

/// Options fixed when an emitter is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Maximum listeners per event name. `0` means unlimited.
    ///
    /// The limit applies to each event independently.
    pub max_listeners: usize,
}

impl EmitterOptions {
    /// Options with no listener limit.
    pub const fn new() -> Self {
        Self { max_listeners: 0 }
    }

    /// Set the per-event listener limit (`0` = unlimited).
    pub const fn with_max_listeners(mut self, max_listeners: usize) -> Self {
        self.max_listeners = max_listeners;
        self
    }

    pub(crate) fn limit(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.max_listeners)
    }
}

/// Builder for constructing an [`Emitter`].
///
/// # Example
/// ```
/// use hark::{Emitter, Envelope};
///
/// let emitter: Emitter<Envelope<&str>> = Emitter::builder()
///     .max_listeners(2)
///     .build();
///
/// assert_eq!(emitter.max_listeners().map(|n| n.get()), Some(2));
/// ```
pub struct EmitterBuilder<M> {
    options: EmitterOptions,
    _message: PhantomData<fn() -> M>,
}

impl<M: Message> EmitterBuilder<M> {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::from(EmitterOptions::default())
    }

    /// Set the per-event listener limit (`0` = unlimited).
    pub fn max_listeners(mut self, max_listeners: usize) -> Self {
        self.options.max_listeners = max_listeners;
        self
    }

    /// The options collected so far.
    pub fn options(&self) -> EmitterOptions {
        self.options
    }

    /// Build the emitter.
    pub fn build(self) -> Emitter<M> {
        Emitter::with_options(self.options)
    }
}

impl<M: Message> Default for EmitterBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for EmitterBuilder<M> {
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            _message: PhantomData,
        }
    }
}

impl<M> fmt::Debug for EmitterBuilder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterBuilder")
            .field("options", &self.options)
            .finish()
    }
}

impl<M> From<EmitterOptions> for EmitterBuilder<M> {
    fn from(options: EmitterOptions) -> Self {
        Self {
            options,
            _message: PhantomData,
        }
    }
}
