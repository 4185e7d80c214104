//! Infrastructure layer for groq-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Groq HTTP provider, configuration
//! loading, the JSONL conversation log and the transcript file writer.

pub mod config;
pub mod export;
pub mod groq;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig, FileReplConfig,
    Severity, load_dotenv, resolve_api_key,
};
pub use export::FileTranscriptExporter;
pub use groq::{GroqClient, GroqError, GroqProvider};
pub use logging::JsonlConversationLogger;
