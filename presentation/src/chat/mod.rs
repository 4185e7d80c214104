//! Interactive chat module
//!
//! Provides the readline-based [`InputSource`](groq_chat_application::InputSource)
//! used by the interactive chat loop.

mod repl;

pub use repl::ReadlineInput;
