//! The conversation log.
//!
//! [`ConversationSession`] is the authoritative, ordered message log that is
//! handed to the completion provider on every turn. It is owned by the host
//! loop and mutated through a narrow surface:
//!
//! ```text
//! new(S)              -> [system(S)]
//! submit_user_turn    -> [system(S), user(..)]                 (returns payload)
//! record_assistant    -> [system(S), user(..), assistant(..)]
//! clear               -> [system(S)]
//! ```
//!
//! Provider failures are recorded as assistant content prefixed with
//! [`ERROR_PREFIX`], so the log stays displayable and exportable and role
//! alternation is preserved.

use super::entities::{Message, Role};
use super::transcript::TurnStats;
use crate::core::error::DomainError;
use std::fmt;

/// System instruction used when none is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful, friendly, and knowledgeable assistant.";

/// Prefix marking an assistant turn that records a provider failure.
pub const ERROR_PREFIX: &str = "Error: ";

/// Ordered, role-tagged message log for one chat session.
///
/// Invariant: `messages[0]` is the only system message. After it, turns
/// alternate user → assistant as long as every submitted user turn is
/// followed by exactly one recorded assistant turn.
///
/// Not designed for concurrent use; the host loop holds it by `&mut`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSession {
    system_prompt: String,
    messages: Vec<Message>,
}

impl ConversationSession {
    /// Create a session whose log holds a single system message.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        Self {
            messages: vec![Message::system(system_prompt.clone())],
            system_prompt,
        }
    }

    /// The system instruction this session was created with.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// The full log, system message included. This is the request payload.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// All turns after the leading system message.
    pub fn turns(&self) -> &[Message] {
        &self.messages[1..]
    }

    /// Append a user turn and return the payload to send.
    ///
    /// Empty or whitespace-only text is rejected with
    /// [`DomainError::EmptyInput`] and the log is left unchanged.
    pub fn submit_user_turn(&mut self, text: impl Into<String>) -> Result<&[Message], DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyInput);
        }
        self.messages.push(Message::user(text));
        Ok(&self.messages)
    }

    /// Append an assistant turn. Never fails.
    pub fn record_assistant_turn(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Append an assistant turn describing a provider failure.
    ///
    /// The content is `"Error: {error}"`, so it counts as a normal turn for
    /// alternation while staying distinguishable via [`Message::is_error`].
    pub fn record_provider_failure(&mut self, error: impl fmt::Display) {
        self.record_assistant_turn(format!("{}{}", ERROR_PREFIX, error));
    }

    /// Reset to a single fresh system message. Prior turns are discarded.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.messages.push(Message::system(self.system_prompt.clone()));
    }

    /// Render every non-system turn as `"{label}: {content}"`, separated by
    /// a blank line. Returns an empty string when there are no turns.
    pub fn export_transcript<F, L>(&self, label: F) -> String
    where
        F: Fn(&Role) -> L,
        L: fmt::Display,
    {
        self.turns()
            .iter()
            .map(|m| format!("{}: {}", label(&m.role), m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Number of turns, excluding the system message.
    pub fn turn_count(&self) -> usize {
        self.turns().len()
    }

    pub fn user_turn_count(&self) -> usize {
        self.count_role(Role::User)
    }

    pub fn assistant_turn_count(&self) -> usize {
        self.count_role(Role::Assistant)
    }

    /// Snapshot of the three counts.
    pub fn stats(&self) -> TurnStats {
        TurnStats {
            total: self.turn_count(),
            user: self.user_turn_count(),
            assistant: self.assistant_turn_count(),
        }
    }

    /// True when no user or assistant turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns().is_empty()
    }

    /// True when the trailing turn is a user turn still waiting for a reply.
    pub fn is_awaiting_reply(&self) -> bool {
        self.messages.last().map(|m| m.role) == Some(Role::User)
    }

    /// Content of the most recent assistant turn, if any.
    pub fn last_assistant_reply(&self) -> Option<&str> {
        self.turns()
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str())
    }

    fn count_role(&self, role: Role) -> usize {
        self.turns().iter().filter(|m| m.role == role).count()
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}
