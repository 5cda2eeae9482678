//! Listener identifiers.

use std::{fmt, num::NonZeroU64};

/// Identifies one registered listener within its emitter.
///
/// Ids are minted from a counter shared by every event of an emitter and are
/// never reused, even after the listener is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(NonZeroU64);

impl ListenerId {
    /// Wrap a raw non-zero id.
    pub const fn new(raw: NonZeroU64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for ListenerId {
    fn from(raw: NonZeroU64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
