//! Presentation layer for groq-chat
//!
//! This crate contains the CLI definition, the readline input source,
//! console output sinks and the reply spinner.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ReadlineInput;
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::{ConsoleFormatter, LineSink, StreamingSink};
pub use progress::ReplySpinner;
