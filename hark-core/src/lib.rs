//! # hark-core
//!
//! Core vocabulary for the hark event emitter.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that only needs to *write* listeners or payload types, without pulling in
//! the emitter itself.
//!
//! # Building Blocks
//!
//! ## Payloads ([`Message`])
//!
//! Everything handed to [`Listener`]s is a [`Message`]: a thread-safe,
//! `'static` value. [`Envelope`] is a ready-made wrapper for payloads that
//! don't deserve their own type.
//!
//! ## Listeners ([`Listener`])
//!
//! A listener is a synchronous callback that observes a message by reference.
//! Every `Fn(&M) + Send + Sync + 'static` closure is a listener already;
//! combinators like [`Listener::filter`] and [`Listener::inspect`] build
//! small pipelines before registration.
//!
//! ## Identity ([`ListenerId`])
//!
//! Registration hands back a [`ListenerId`], which is the only way to remove
//! one specific listener later.
//!
//! # Error Types
//!
//! - [`EmitterError`] - Registration errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod id;
mod listener;
mod message;

// Re-exports
pub use error::{EmitterError, Result};
pub use id::ListenerId;
pub use listener::{BoxListener, Filter, Inspect, Listener};
pub use message::{Envelope, Message};
