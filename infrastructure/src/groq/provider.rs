//! [`CompletionProvider`] implementation backed by the Groq API

use super::client::GroqClient;
use super::error::GroqError;
use super::protocol::ChatCompletionRequest;
use super::sse::{SseOutcome, forward_sse};
use async_trait::async_trait;
use futures::StreamExt;
use groq_chat_application::{CompletionProvider, ProviderError, StreamHandle};
use groq_chat_domain::{GroqProviderConfig, Message, RequestConfig, StreamEvent};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio_util::io::StreamReader;
use tracing::debug;

/// Bounded so a slow terminal applies backpressure to the reader task.
const STREAM_BUFFER: usize = 64;

pub struct GroqProvider {
    client: GroqClient,
}

impl GroqProvider {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    pub fn from_config(
        config: &GroqProviderConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, GroqError> {
        Ok(Self::new(GroqClient::new(config, api_key)?))
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(
        &self,
        messages: &[Message],
        config: &RequestConfig,
    ) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest::new(messages, config, false);
        Ok(self.client.complete(&body).await?)
    }

    /// Status errors surface here; body errors arrive as a terminal
    /// [`StreamEvent::Error`].
    async fn complete_streaming(
        &self,
        messages: &[Message],
        config: &RequestConfig,
    ) -> Result<StreamHandle, ProviderError> {
        let body = ChatCompletionRequest::new(messages, config, true);
        let response = self.client.stream(&body).await?;

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tokio::spawn(async move {
            let byte_stream = response
                .bytes_stream()
                .map(|result| result.map_err(std::io::Error::other));
            let reader = BufReader::new(StreamReader::new(byte_stream));

            let terminal = match forward_sse(reader, &tx).await {
                Ok(SseOutcome::Finished(text)) => StreamEvent::Completed(text),
                Ok(SseOutcome::ReceiverClosed) => return,
                Err(e) => StreamEvent::Error(stream_error_message(e)),
            };
            if tx.send(terminal).await.is_err() {
                debug!("Stream receiver dropped before terminal event");
            }
        });

        Ok(StreamHandle::new(rx))
    }
}

/// Message for a terminal error event; the consumer adds its own
/// "Stream error" prefix.
fn stream_error_message(err: GroqError) -> String {
    match ProviderError::from(err) {
        ProviderError::Stream(message) => message,
        other => other.to_string(),
    }
}
