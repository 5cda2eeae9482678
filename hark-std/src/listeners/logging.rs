//! Logging listener for event observation.

use hark_core::{Listener, Message};

/// A listener that logs every message it observes.
///
/// With the `tracing` feature disabled this listener does nothing, so it can
/// stay registered in builds without a subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggingListener {
    label: Option<&'static str>,
}

impl LoggingListener {
    /// Create an unlabelled logging listener.
    pub fn new() -> Self {
        Self { label: None }
    }

    /// Create a logging listener whose records carry `label`.
    pub fn labelled(label: &'static str) -> Self {
        Self { label: Some(label) }
    }

    /// The label attached to log records, if any.
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }
}

impl<M: Message + std::fmt::Debug> Listener<M> for LoggingListener {
    fn on_message(&self, message: &M) {
        #[cfg(feature = "tracing")]
        {
            match self.label {
                Some(label) => tracing::info!(label, ?message, "Observed message"),
                None => tracing::info!(?message, "Observed message"),
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = message; // Suppress unused warning
        }
    }
}
