//! Completion provider port
//!
//! Defines the interface for sending a conversation to a hosted model and
//! getting the reply back, either whole or as a stream of fragments.

use async_trait::async_trait;
use groq_chat_domain::{Message, RequestConfig, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during a provider call
///
/// None of these escape a chat turn: the turn records them as assistant
/// content so the transcript stays well-formed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Stream closed before completion")]
    StreamClosed,

    #[error("Request timed out")]
    Timeout,

    #[error("Request cancelled")]
    Cancelled,
}

impl ProviderError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ProviderError::Cancelled)
    }
}

/// Handle for receiving streaming events from a provider call.
///
/// Wraps an `mpsc::Receiver<StreamEvent>`. Dropping the handle stops the
/// producer on its next send, which is how a caller cancels a stream.
pub struct StreamHandle {
    receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Wait for the next event; `None` once the producer is gone.
    pub async fn next_event(&mut self) -> Option<StreamEvent> {
        self.receiver.recv().await
    }

    /// Consume the stream and collect all text into a single string.
    pub async fn collect_text(mut self) -> Result<String, ProviderError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => full_text.push_str(&chunk),
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => return Err(ProviderError::Stream(e)),
            }
        }
        if full_text.is_empty() {
            Err(ProviderError::StreamClosed)
        } else {
            Ok(full_text)
        }
    }
}

/// Hosted chat-completion API
///
/// Consumes the ordered message log plus per-call parameters. Adapters
/// live in the infrastructure layer.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name for logs and banners.
    fn name(&self) -> &str;

    /// Send the conversation and wait for the complete reply.
    async fn complete(
        &self,
        messages: &[Message],
        config: &RequestConfig,
    ) -> Result<String, ProviderError>;

    /// Send the conversation and receive the reply incrementally.
    ///
    /// Default implementation calls `complete()` and wraps the result in a
    /// single `Completed` event, so non-streaming adapters work unchanged.
    async fn complete_streaming(
        &self,
        messages: &[Message],
        config: &RequestConfig,
    ) -> Result<StreamHandle, ProviderError> {
        let result = self.complete(messages, config).await?;
        let (tx, rx) = mpsc::channel(1);
        // Receiver may already be gone; nothing to do then
        let _ = tx.send(StreamEvent::Completed(result)).await;
        Ok(StreamHandle::new(rx))
    }
}
