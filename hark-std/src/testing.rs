//! Testing utilities for hark.
//!
//! This module provides listeners that make assertions about dispatch easy.
//!
//! # Features
//!
//! - [`RecordingListener`]: A listener that records all messages it receives
//! - [`CountingListener`]: A listener that only counts invocations
//! - [`OrderRecorder`]: Hands out tagged listeners and records the order they fire in
//!
//! All of them are cheap handles: clones share the same storage, so one clone
//! can be registered while the test keeps another for inspection.

use hark_core::{Listener, Message};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records all messages it receives.
///
/// # Example
///
/// ```rust
/// use hark_core::Listener;
/// use hark_std::testing::RecordingListener;
///
/// let recorder = RecordingListener::<String>::new();
/// let handle = recorder.clone();
///
/// recorder.on_message(&"hello".to_string());
///
/// assert_eq!(handle.messages(), vec!["hello".to_string()]);
/// ```
pub struct RecordingListener<M: Clone> {
    messages: Arc<Mutex<Vec<M>>>,
}

impl<M: Clone> RecordingListener<M> {
    /// Create a new, empty recording listener.
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded messages.
    pub fn messages(&self) -> Vec<M> {
        self.lock().clone()
    }

    /// Get the number of recorded messages.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded messages.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<M>> {
        // A panicking test listener must not hide what was recorded so far.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M: Clone> Default for RecordingListener<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone> Clone for RecordingListener<M> {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
        }
    }
}

impl<M: Message + Clone> Listener<M> for RecordingListener<M> {
    fn on_message(&self, message: &M) {
        self.lock().push(message.clone());
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations.
///
/// # Example
///
/// ```rust
/// use hark_core::Listener;
/// use hark_std::testing::CountingListener;
///
/// let counter = CountingListener::new();
/// Listener::<u32>::on_message(&counter, &1);
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Clone for CountingListener {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<M: Message> Listener<M> for CountingListener {
    fn on_message(&self, _message: &M) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Order Recorder
// ============================================================================

/// Records the order in which tagged listeners fire.
///
/// # Example
///
/// ```rust
/// use hark_core::Listener;
/// use hark_std::testing::OrderRecorder;
///
/// let recorder = OrderRecorder::new();
/// let first = recorder.listener(1);
/// let second = recorder.listener(2);
///
/// Listener::<()>::on_message(&second, &());
/// Listener::<()>::on_message(&first, &());
///
/// assert_eq!(recorder.order(), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderRecorder {
    order: Arc<Mutex<Vec<usize>>>,
}

impl OrderRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that pushes `tag` every time it fires.
    pub fn listener(&self, tag: usize) -> OrderListener {
        OrderListener {
            tag,
            order: self.order.clone(),
        }
    }

    /// The tags recorded so far, in firing order.
    pub fn order(&self) -> Vec<usize> {
        self.order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Listener handed out by [`OrderRecorder::listener`].
#[derive(Debug, Clone)]
pub struct OrderListener {
    tag: usize,
    order: Arc<Mutex<Vec<usize>>>,
}

impl OrderListener {
    /// The tag this listener records.
    pub fn tag(&self) -> usize {
        self.tag
    }
}

impl<M: Message> Listener<M> for OrderListener {
    fn on_message(&self, _message: &M) {
        self.order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.tag);
    }
}
