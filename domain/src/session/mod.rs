//! Conversation session domain.
//!
//! - [`entities::Message`] - a single role-tagged turn
//! - [`conversation::ConversationSession`] - the ordered message log
//! - [`transcript`] - human-readable export and turn statistics
//! - [`stream::StreamEvent`] - incremental reply events

pub mod conversation;
pub mod entities;
pub mod stream;
pub mod transcript;
