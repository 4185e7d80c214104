//! HTTP client for the Groq chat-completions endpoint

use super::error::{GroqError, Result};
use super::protocol::{ChatCompletionRequest, ChatCompletionResponse, extract_error_message};
use groq_chat_domain::GroqProviderConfig;
use reqwest::header::{ACCEPT, HeaderValue};
use std::time::Duration;
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin reqwest wrapper: bearer auth, JSON bodies, status checking.
///
/// The overall request deadline is applied by the chat turn, not here,
/// so long streamed replies are not cut off mid-body.
#[derive(Debug, Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GroqClient {
    pub fn new(config: &GroqProviderConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("groq-chat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send a non-streaming request and return the first choice's text.
    pub async fn complete(&self, body: &ChatCompletionRequest<'_>) -> Result<String> {
        let response = self.post(body, false).await?;
        let raw = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&raw)?;
        parsed.into_text().ok_or(GroqError::EmptyChoices)
    }

    /// Send a streaming request; the caller reads the SSE body.
    pub async fn stream(&self, body: &ChatCompletionRequest<'_>) -> Result<reqwest::Response> {
        self.post(body, true).await
    }

    async fn post(&self, body: &ChatCompletionRequest<'_>, event_stream: bool) -> Result<reqwest::Response> {
        debug!(
            "POST {} (model: {}, {} messages, stream: {})",
            self.endpoint(),
            body.model,
            body.messages.len(),
            event_stream
        );

        let mut request = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(body);
        if event_stream {
            request = request.header(ACCEPT, HeaderValue::from_static("text/event-stream"));
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        debug!("Groq API returned {}: {}", status, text);
        Err(GroqError::Status {
            status: status.as_u16(),
            message: extract_error_message(&text),
        })
    }
}
