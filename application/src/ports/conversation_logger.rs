//! Conversation event log port.
//!
//! `tracing` carries diagnostics for humans. This port carries the chat
//! itself (turns, failures, clears, exports) as machine-readable records;
//! the infrastructure adapter writes them as JSONL.

use serde_json::Value;

/// Event type names written to the log.
pub mod event_types {
    pub const USER_TURN: &str = "user_turn";
    pub const ASSISTANT_TURN: &str = "assistant_turn";
    pub const PROVIDER_ERROR: &str = "provider_error";
    pub const SESSION_CLEARED: &str = "session_cleared";
    pub const TRANSCRIPT_EXPORTED: &str = "transcript_exported";
}

/// One loggable event: a type name plus a JSON payload.
///
/// The writer stamps time and session; payloads only carry event data.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Event with no payload fields.
    pub fn bare(event_type: &'static str) -> Self {
        Self::new(event_type, Value::Object(Default::default()))
    }
}

/// Sink for conversation events.
///
/// `log` cannot fail: a broken log file must not interrupt the chat, so
/// implementations swallow (and at most trace) their own errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event. Used when no log file is configured.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_event_has_empty_object() {
        let event = ConversationEvent::bare(event_types::SESSION_CLEARED);
        assert_eq!(event.event_type, "session_cleared");
        assert_eq!(event.payload, serde_json::json!({}));
    }
}
