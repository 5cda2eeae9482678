//! # hark-std
//!
//! Standard implementations for the hark event emitter.
//!
//! This crate provides:
//! - **Standard listeners**: [`listeners::LoggingListener`]
//! - **Testing utilities**: recording, counting, and order-tracking listeners

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use hark_core;

// Modules
pub mod listeners;
pub mod testing;
