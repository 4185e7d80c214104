//! Domain layer for groq-chat
//!
//! This crate contains the conversation model and the request-shaping rules.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation Session
//!
//! A [`ConversationSession`] owns the ordered message log. The log is the
//! request payload: it always starts with one system message, followed by
//! alternating user and assistant turns.
//!
//! ## Request Config
//!
//! A [`RequestConfig`] carries the per-call knobs (model, temperature,
//! token limit, streaming). It is supplied by the caller at call time and is
//! never stored in the session.

pub mod core;
pub mod interaction;
pub mod providers;
pub mod request;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use interaction::command::HostCommand;
pub use providers::GroqProviderConfig;
pub use request::config::RequestConfig;
pub use session::{
    conversation::{ConversationSession, DEFAULT_SYSTEM_PROMPT, ERROR_PREFIX},
    entities::{Message, Role},
    stream::StreamEvent,
    transcript::{RoleLabels, TurnStats, default_label},
};
