//! Application layer for groq-chat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    completion_provider::{CompletionProvider, ProviderError, StreamHandle},
    console::{InputError, InputEvent, InputSource, OutputSink},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger, event_types},
    transcript_exporter::{ExportError, TranscriptExporter},
};
pub use use_cases::chat_loop::{ChatLoop, ChatLoopError, DEFAULT_PROMPT};
pub use use_cases::run_chat_turn::{
    CANCELLED_MARKER, RunChatTurnError, RunChatTurnUseCase, TurnOutcome, TurnStatus,
};
