//! Self-removing listener adapter behind [`Emitter::once`].
//!
//! [`Emitter::once`]: crate::Emitter::once

use crate::registry::{self, Registry};
use hark_core::{Listener, ListenerId, Message};
use std::sync::{
    Mutex, Weak,
    atomic::{AtomicBool, Ordering},
};

/// Wraps a listener so that it removes itself on first invocation and only
/// then runs the inner listener.
///
/// The adapter is built inside the same critical section that mints `id` and
/// installs it, so `id` is always the id it is registered under.
pub(crate) struct OnceListener<M: Message, L> {
    id: ListenerId,
    event: String,
    registry: Weak<Mutex<Registry<M>>>,
    fired: AtomicBool,
    listener: L,
}

impl<M: Message, L: Listener<M>> OnceListener<M, L> {
    pub(crate) fn new(
        id: ListenerId,
        event: &str,
        registry: Weak<Mutex<Registry<M>>>,
        listener: L,
    ) -> Self {
        Self {
            id,
            event: event.to_owned(),
            registry,
            fired: AtomicBool::new(false),
            listener,
        }
    }
}

impl<M: Message, L: Listener<M>> Listener<M> for OnceListener<M, L> {
    fn on_message(&self, message: &M) {
        // Two concurrent emits may both have snapshotted this adapter.
        if self.fired.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            let removed = registry::lock(&registry).remove(&self.event, self.id);
            drop(removed);
        }
        self.listener.on_message(message);
    }
}
