//! # Listeners
//!
//! A [`Listener`] is the consumer side of an emitter: a synchronous callback
//! that observes each emitted message by reference and returns nothing.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|msg: &MyEvent| { ... }`
//! 2. **Struct implementation**: `impl Listener<MyEvent> for MyListener`
//! 3. **Combinators**: `listener.filter(..)`, `listener.inspect(..)`
//!
//! Listeners run on the thread that called `emit`, one after another. They
//! may be invoked concurrently from different threads, hence the
//! `Send + Sync` bound.

use crate::message::Message;
use std::{fmt, sync::Arc};

/// A synchronous consumer of messages of type `M`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener` for `{M}`",
    label = "missing `Listener` implementation",
    note = "Listeners implement `on_message`, or are closures of type `Fn(&{M})`."
)]
pub trait Listener<M: Message>: Send + Sync + 'static {
    /// Observe one emitted message.
    fn on_message(&self, message: &M);

    /// Only forward messages matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&M) -> bool + Send + Sync + 'static,
    {
        Filter {
            listener: self,
            predicate,
        }
    }

    /// Run `f` on every message before this listener sees it.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&M) + Send + Sync + 'static,
    {
        Inspect { listener: self, f }
    }

    /// Erase the listener type.
    fn boxed(self) -> BoxListener<M>
    where
        Self: Sized,
    {
        BoxListener::new(self)
    }
}

impl<M, F> Listener<M> for F
where
    M: Message,
    F: Fn(&M) + Send + Sync + 'static,
{
    fn on_message(&self, message: &M) {
        self(message)
    }
}

/// Listener returned by [`Listener::filter`].
pub struct Filter<L, P> {
    listener: L,
    predicate: P,
}

impl<M, L, P> Listener<M> for Filter<L, P>
where
    M: Message,
    L: Listener<M>,
    P: Fn(&M) -> bool + Send + Sync + 'static,
{
    fn on_message(&self, message: &M) {
        if (self.predicate)(message) {
            self.listener.on_message(message);
        }
    }
}

/// Listener returned by [`Listener::inspect`].
pub struct Inspect<L, F> {
    listener: L,
    f: F,
}

impl<M, L, F> Listener<M> for Inspect<L, F>
where
    M: Message,
    L: Listener<M>,
    F: Fn(&M) + Send + Sync + 'static,
{
    fn on_message(&self, message: &M) {
        (self.f)(message);
        self.listener.on_message(message);
    }
}

/// A type-erased, cheaply clonable listener.
///
/// This is the form an emitter stores; cloning only bumps a reference count,
/// which is what lets `emit` snapshot a listener list without holding a lock
/// while the listeners run.
pub struct BoxListener<M: Message> {
    inner: Arc<dyn Listener<M>>,
}

impl<M: Message> BoxListener<M> {
    /// Box `listener`.
    pub fn new<L: Listener<M>>(listener: L) -> Self {
        Self {
            inner: Arc::new(listener),
        }
    }
}

impl<M: Message> Clone for BoxListener<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: Message> fmt::Debug for BoxListener<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxListener").finish_non_exhaustive()
    }
}

impl<M: Message> Listener<M> for BoxListener<M> {
    fn on_message(&self, message: &M) {
        self.inner.on_message(message);
    }

    fn boxed(self) -> BoxListener<M> {
        self
    }
}
