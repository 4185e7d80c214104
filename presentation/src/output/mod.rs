//! Console output: formatting helpers and [`OutputSink`] implementations
//!
//! [`OutputSink`]: groq_chat_application::OutputSink

pub mod console;
pub mod formatter;

pub use console::{LineSink, StreamingSink};
pub use formatter::ConsoleFormatter;
