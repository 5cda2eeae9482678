#![allow(dead_code)]

use hark::{Emitter, EmitterOptions, Envelope};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

// ============================================================================
// Test Message Types
// ============================================================================

pub type TextMessage = Envelope<&'static str>;

#[derive(Clone, Debug, PartialEq)]
pub struct Saved {
    pub path: String,
    pub bytes: u64,
}

impl hark::Message for Saved {}

// ============================================================================
// Helpers
// ============================================================================

pub fn emitter_with_limit(max_listeners: usize) -> Emitter<TextMessage> {
    Emitter::with_options(EmitterOptions::new().with_max_listeners(max_listeners))
}

pub fn text(data: &'static str) -> TextMessage {
    Envelope::new(data)
}

/// Per-name invocation tally shared between listeners and the test body.
#[derive(Clone, Default)]
pub struct Tally {
    received: Arc<Mutex<HashMap<&'static str, usize>>>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that bumps `name` every time it runs.
    pub fn handler(&self, name: &'static str) -> impl Fn(&TextMessage) + Send + Sync + use<> {
        let received = self.received.clone();
        move |_: &TextMessage| {
            *received.lock().unwrap().entry(name).or_insert(0) += 1;
        }
    }

    pub fn get(&self, name: &str) -> usize {
        self.received.lock().unwrap().get(name).copied().unwrap_or(0)
    }
}
