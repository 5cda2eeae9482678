//! # hark - In-Process Event Emitter
//!
//! `hark` is a thread-safe publish/subscribe registry. Callers register
//! listeners under event names and later emit a payload to every listener of
//! one event, synchronously, on the emitting thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use hark::{Emitter, EmitterError, Envelope};
//!
//! let emitter = Emitter::<Envelope<String>>::builder()
//!     .max_listeners(2)
//!     .build();
//!
//! emitter.on("saved", |msg| println!("saved {}", msg.data)).unwrap();
//! emitter.once("saved", |_| println!("first save!")).unwrap();
//!
//! // The per-event limit is reached.
//! let err = emitter.on("saved", |_| {}).unwrap_err();
//! assert!(matches!(err, EmitterError::LimitExceeded { .. }));
//!
//! emitter.emit("saved", &Envelope::new("report.txt".to_string()));
//! assert_eq!(emitter.count("saved"), 1);
//! ```
//!
//! ## Guarantees
//!
//! - Listener ids are unique for the lifetime of an emitter.
//! - One emit runs listeners in registration order.
//! - Listeners never run while the emitter's lock is held, so they may
//!   register, remove, or emit from inside a callback.
//! - `once` listeners run at most once.
//!
//! ## Features
//!
//! - `tracing`: log registrations, removals, and emits with `tracing`, and
//!   enable [`listeners::LoggingListener`] output.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod emitter;
mod log;
mod once;
mod options;
mod registry;

pub use emitter::Emitter;
pub use options::{EmitterBuilder, EmitterOptions};

pub use hark_core::{
    // Listener (with combinators)
    BoxListener,
    // Error types
    EmitterError,
    // Message
    Envelope,
    Filter,
    Inspect,
    Listener,
    ListenerId,
    Message,
    Result,
};

/// Standard listener implementations.
pub mod listeners {
    #![allow(clippy::wildcard_imports)]
    pub use hark_std::listeners::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use hark_std::testing::*;
}

/// Prelude module - common imports for hark.
///
/// # Usage
///
/// ```rust
/// use hark::prelude::*;
///
/// let emitter: Emitter<Envelope<u32>> = Emitter::new();
/// assert_eq!(emitter.count_all(), 0);
/// ```
pub mod prelude {
    pub use crate::{
        BoxListener, Emitter, EmitterError, EmitterOptions, Envelope, Listener, ListenerId,
        Message,
    };
}
