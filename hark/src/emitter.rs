//! The [`Emitter`]: named events, ordered listeners, synchronous dispatch.
//!
//! # Locking
//!
//! One mutex guards the listener map and the id counter. Every operation
//! holds it for its whole critical section, except [`Emitter::emit`], which
//! holds it only long enough to copy the target event's listener handles.
//! Listeners therefore never run under the lock and may freely call back
//! into the emitter: register, remove, or emit other events.

use crate::{
    log::{debug, trace},
    once::OnceListener,
    options::{EmitterBuilder, EmitterOptions},
    registry::{self, Registry},
};
use hark_core::{BoxListener, EmitterError, Listener, ListenerId, Message, Result};
use std::{
    fmt,
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard},
};

/// A thread-safe registry of named-event listeners.
///
/// An emitter is bound to one payload type `M`. It is created explicitly and
/// shared by reference (or behind an `Arc`); there is no global instance.
///
/// # Example
///
/// ```
/// use hark::{Emitter, Envelope};
/// use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
///
/// let emitter = Emitter::<Envelope<&str>>::new();
/// let hits = Arc::new(AtomicUsize::new(0));
///
/// let counter = hits.clone();
/// let id = emitter
///     .on("greet", move |msg| {
///         assert_eq!(msg.data, "hello");
///         counter.fetch_add(1, Ordering::SeqCst);
///     })
///     .unwrap();
///
/// emitter.emit("greet", &Envelope::new("hello"));
/// emitter.off("greet", id);
/// emitter.emit("greet", &Envelope::new("hello"));
///
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
pub struct Emitter<M: Message> {
    registry: Arc<Mutex<Registry<M>>>,
    max_listeners: Option<NonZeroUsize>,
}

impl<M: Message> Emitter<M> {
    /// Create an emitter with no listener limit.
    pub fn new() -> Self {
        Self::with_options(EmitterOptions::default())
    }

    /// Create an emitter with the given options.
    pub fn with_options(options: EmitterOptions) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
            max_listeners: options.limit(),
        }
    }

    /// Start building an emitter.
    pub fn builder() -> EmitterBuilder<M> {
        EmitterBuilder::new()
    }

    /// The per-event listener limit, `None` when unlimited.
    pub fn max_listeners(&self) -> Option<NonZeroUsize> {
        self.max_listeners
    }

    /// Register `callback` for `event`.
    ///
    /// The listener is appended after every listener already registered for
    /// `event`, so it runs after them.
    ///
    /// # Errors
    ///
    /// [`EmitterError::LimitExceeded`] if `event` already holds the
    /// configured maximum number of listeners. Nothing is registered.
    pub fn on<F>(&self, event: &str, callback: F) -> Result<ListenerId>
    where
        F: Fn(&M) + Send + Sync + 'static,
    {
        self.on_listener(event, callback)
    }

    /// Register any [`Listener`] for `event`. Same contract as [`Emitter::on`].
    pub fn on_listener<L: Listener<M>>(&self, event: &str, listener: L) -> Result<ListenerId> {
        self.register(event, |_| listener.boxed())
    }

    /// Register `callback` to run at most once, on the next emit of `event`.
    ///
    /// On its first invocation the listener removes itself and then runs
    /// `callback`. Emits triggered from inside `callback` therefore cannot
    /// reach it again, and concurrent emits on other threads run it at most
    /// once between them.
    ///
    /// # Errors
    ///
    /// Same as [`Emitter::on`].
    pub fn once<F>(&self, event: &str, callback: F) -> Result<ListenerId>
    where
        F: Fn(&M) + Send + Sync + 'static,
    {
        self.once_listener(event, callback)
    }

    /// Register any [`Listener`] to run at most once. Same contract as
    /// [`Emitter::once`].
    pub fn once_listener<L: Listener<M>>(&self, event: &str, listener: L) -> Result<ListenerId> {
        let registry = Arc::downgrade(&self.registry);
        self.register(event, |id| {
            OnceListener::new(id, event, registry, listener).boxed()
        })
    }

    /// Emit `message` to every listener of `event`, in registration order.
    ///
    /// The listener list is copied before any listener runs; listeners added
    /// or removed meanwhile only affect later emits. A panicking listener
    /// unwinds through this call and the listeners after it do not run.
    ///
    /// Returns how many listeners were invoked.
    pub fn emit(&self, event: &str, message: &M) -> usize {
        let snapshot = self.lock().snapshot(event);
        trace!(event, listeners = snapshot.len(), "Emitting event");
        for listener in &snapshot {
            listener.on_message(message);
        }
        snapshot.len()
    }

    /// Remove the listener `id` from `event`. Unknown events or ids are
    /// ignored.
    pub fn off(&self, event: &str, id: ListenerId) {
        let removed = self.lock().remove(event, id);
        if removed.is_some() {
            trace!(event, %id, "Removed listener");
        }
        drop(removed);
    }

    /// Remove every listener of `event`.
    pub fn remove_all(&self, event: &str) {
        let removed = self.lock().remove_all(event);
        if !removed.is_empty() {
            trace!(event, listeners = removed.len(), "Removed all listeners");
        }
        drop(removed);
    }

    /// Remove every listener of every event. Ids are still never reused.
    pub fn clear(&self) {
        let removed = self.lock().clear();
        trace!(events = removed.len(), "Cleared emitter");
        drop(removed);
    }

    /// Number of listeners registered for `event`.
    pub fn count(&self, event: &str) -> usize {
        self.lock().count(event)
    }

    /// Number of listeners registered across all events.
    pub fn count_all(&self) -> usize {
        self.lock().count_all()
    }

    /// Whether `event` has at least one listener.
    pub fn contains(&self, event: &str) -> bool {
        self.lock().contains(event)
    }

    /// Names of all events with at least one listener, sorted.
    pub fn event_names(&self) -> Vec<String> {
        self.lock().event_names()
    }

    /// Check the limit, mint an id, and install the listener built by
    /// `make`, all in one critical section.
    fn register<B>(&self, event: &str, make: B) -> Result<ListenerId>
    where
        B: FnOnce(ListenerId) -> BoxListener<M>,
    {
        let mut registry = self.lock();
        if let Some(limit) = self.max_listeners {
            if registry.count(event) >= limit.get() {
                debug!(event, limit = limit.get(), "Listener limit reached");
                return Err(EmitterError::limit_exceeded(event, limit.get()));
            }
        }
        let id = registry.mint_id();
        registry.push(event, id, make(id));
        trace!(event, %id, "Registered listener");
        Ok(id)
    }

    fn lock(&self) -> MutexGuard<'_, Registry<M>> {
        registry::lock(&self.registry)
    }
}

impl<M: Message> Default for Emitter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Message> fmt::Debug for Emitter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.lock();
        f.debug_struct("Emitter")
            .field("max_listeners", &self.max_listeners)
            .field("events", &registry.event_names())
            .field("listeners", &registry.count_all())
            .finish()
    }
}
