//! Groq chat-completions adapter
//!
//! Talks to Groq's OpenAI-compatible `/chat/completions` endpoint over
//! HTTPS with reqwest. Streaming replies arrive as server-sent events and
//! are forwarded as [`StreamEvent`](groq_chat_domain::StreamEvent)s.

pub mod client;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod sse;

pub use client::GroqClient;
pub use error::GroqError;
pub use provider::GroqProvider;
