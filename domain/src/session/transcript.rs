//! Transcript labelling and turn statistics.

use super::entities::Role;
use serde::{Deserialize, Serialize};

/// Default display label for a role in an exported transcript.
pub fn default_label(role: &Role) -> &'static str {
    match role {
        Role::System => "System",
        Role::User => "User",
        Role::Assistant => "Assistant",
    }
}

/// Configurable display labels for user and assistant turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleLabels {
    pub user: String,
    pub assistant: String,
}

impl RoleLabels {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }

    /// Label for `role`; system turns always use the default label.
    pub fn label(&self, role: &Role) -> &str {
        match role {
            Role::User => &self.user,
            Role::Assistant => &self.assistant,
            Role::System => default_label(role),
        }
    }
}

impl Default for RoleLabels {
    fn default() -> Self {
        Self::new(default_label(&Role::User), default_label(&Role::Assistant))
    }
}

/// Turn counts for display, excluding the system message.
///
/// `total == user + assistant` always holds for snapshots taken from a
/// [`ConversationSession`](super::conversation::ConversationSession).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStats {
    pub total: usize,
    pub user: usize,
    pub assistant: usize,
}

impl std::fmt::Display for TurnStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} turns ({} user, {} assistant)",
            self.total, self.user, self.assistant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = RoleLabels::default();
        assert_eq!(labels.label(&Role::User), "User");
        assert_eq!(labels.label(&Role::Assistant), "Assistant");
        assert_eq!(labels.label(&Role::System), "System");
    }

    #[test]
    fn test_custom_labels() {
        let labels = RoleLabels::new("You", "Chatbot");
        assert_eq!(labels.label(&Role::User), "You");
        assert_eq!(labels.label(&Role::Assistant), "Chatbot");
    }

    #[test]
    fn test_stats_display() {
        let stats = TurnStats {
            total: 3,
            user: 2,
            assistant: 1,
        };
        assert_eq!(stats.to_string(), "3 turns (2 user, 1 assistant)");
    }
}
