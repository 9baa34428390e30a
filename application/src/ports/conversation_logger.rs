//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording the prompts,
//! model replies and image searches of a pipeline run.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! short diagnostic messages, while this port captures the full transcript
//! in a machine-readable format (JSONL). API keys are never part of an
//! event.

use serde_json::Value;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "llm_request", "image_search").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; a logger that cannot write drops
/// the event.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
