//! Listener storage behind an emitter's lock.
//!
//! Everything here runs with the emitter's mutex held, so nothing in this
//! module invokes a listener. Removal methods hand the removed listeners back
//! to the caller so they are dropped after the lock is released.

use hark_core::{BoxListener, ListenerId, Message};
use std::{
    collections::HashMap,
    num::NonZeroU64,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// A registered listener and its id.
pub(crate) struct Entry<M: Message> {
    pub(crate) id: ListenerId,
    pub(crate) listener: BoxListener<M>,
}

/// Event name to ordered listeners, plus the id counter.
///
/// Invariant: every key maps to a non-empty list.
pub(crate) struct Registry<M: Message> {
    events: HashMap<String, Vec<Entry<M>>>,
    next_id: NonZeroU64,
}

impl<M: Message> Registry<M> {
    pub(crate) fn new() -> Self {
        Self {
            events: HashMap::new(),
            next_id: NonZeroU64::MIN,
        }
    }

    /// Mint a fresh id. Ids are shared across events and never reused.
    pub(crate) fn mint_id(&mut self) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        // u64 ids cannot be exhausted in practice.
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Append a listener to the end of `event`'s list.
    pub(crate) fn push(&mut self, event: &str, id: ListenerId, listener: BoxListener<M>) {
        let entry = Entry { id, listener };
        match self.events.get_mut(event) {
            Some(entries) => entries.push(entry),
            None => {
                self.events.insert(event.to_owned(), vec![entry]);
            }
        }
    }

    /// Remove one listener, keeping the order of the rest.
    pub(crate) fn remove(&mut self, event: &str, id: ListenerId) -> Option<Entry<M>> {
        let entries = self.events.get_mut(event)?;
        let position = entries.iter().position(|entry| entry.id == id)?;
        let removed = entries.remove(position);
        if entries.is_empty() {
            self.events.remove(event);
        }
        Some(removed)
    }

    /// Remove every listener of `event`.
    pub(crate) fn remove_all(&mut self, event: &str) -> Vec<Entry<M>> {
        self.events.remove(event).unwrap_or_default()
    }

    /// Remove every listener of every event. The id counter keeps going.
    pub(crate) fn clear(&mut self) -> HashMap<String, Vec<Entry<M>>> {
        std::mem::take(&mut self.events)
    }

    /// Copy the listener handles of `event`, in registration order.
    pub(crate) fn snapshot(&self, event: &str) -> Vec<BoxListener<M>> {
        self.events
            .get(event)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| entry.listener.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn count(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    pub(crate) fn count_all(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub(crate) fn contains(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Event names holding at least one listener, sorted.
    pub(crate) fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

/// Lock a registry, recovering the guard if a previous holder panicked.
///
/// No listener ever runs under this lock, so a poisoned registry is still
/// structurally sound.
pub(crate) fn lock<M: Message>(registry: &Mutex<Registry<M>>) -> MutexGuard<'_, Registry<M>> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}
