//! Run Chat Turn use case.
//!
//! One request/response cycle: submit the user's text to the session, call
//! the completion provider with the full log, and record exactly one
//! assistant turn, whatever happens to the provider call.

use crate::config::BehaviorConfig;
use crate::ports::completion_provider::{CompletionProvider, ProviderError};
use crate::ports::console::OutputSink;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, event_types,
};
use groq_chat_domain::util::preview;
use groq_chat_domain::{
    ConversationSession, DomainError, ERROR_PREFIX, Message, RequestConfig, StreamEvent,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Appended to a partially streamed reply that was cancelled.
pub const CANCELLED_MARKER: &str = "\n\n[cancelled]";

/// Errors that abort a turn before the provider is called.
///
/// Provider failures are not errors here; they are recorded in the log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunChatTurnError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RunChatTurnError {
    pub fn is_empty_input(&self) -> bool {
        matches!(self, RunChatTurnError::Domain(e) if e.is_empty_input())
    }
}

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Replied,
    Failed,
    Cancelled,
}

/// Result of a completed turn: what was recorded as the assistant turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub reply: String,
    pub status: TurnStatus,
}

impl TurnOutcome {
    pub fn is_failed(&self) -> bool {
        self.status == TurnStatus::Failed
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == TurnStatus::Cancelled
    }
}

/// Use case for running one chat turn.
#[derive(Clone)]
pub struct RunChatTurnUseCase {
    provider: Arc<dyn CompletionProvider>,
    behavior: BehaviorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunChatTurnUseCase {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            behavior: BehaviorConfig::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    pub fn conversation_logger(&self) -> &Arc<dyn ConversationLogger> {
        &self.conversation_logger
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run a turn without a cancellation token.
    pub async fn execute(
        &self,
        session: &mut ConversationSession,
        text: &str,
        config: &RequestConfig,
        sink: &mut dyn OutputSink,
    ) -> Result<TurnOutcome, RunChatTurnError> {
        self.execute_cancellable(session, text, config, sink, None)
            .await
    }

    /// Run a turn that stops waiting on the provider once `cancel` fires.
    ///
    /// Returns `Err` only for an invalid config or empty input; in both
    /// cases the log is unchanged and the provider is never called.
    pub async fn execute_cancellable(
        &self,
        session: &mut ConversationSession,
        text: &str,
        config: &RequestConfig,
        sink: &mut dyn OutputSink,
        cancel: Option<&CancellationToken>,
    ) -> Result<TurnOutcome, RunChatTurnError> {
        config.validate()?;
        session.submit_user_turn(text)?;

        info!(
            "Sending turn to {} ({}): {}",
            self.provider.name(),
            config.model,
            preview(text, 80)
        );
        self.conversation_logger.log(ConversationEvent::new(
            event_types::USER_TURN,
            serde_json::json!({
                "model": config.model.to_string(),
                "stream": config.stream,
                "text": text,
            }),
        ));

        sink.on_reply_start(&config.model);

        let mut partial = String::new();
        let result = {
            let fetch = self.fetch(session.messages(), config, &mut *sink, &mut partial);
            let limited = async {
                match self.behavior.timeout {
                    Some(limit) => tokio::time::timeout(limit, fetch)
                        .await
                        .unwrap_or(Err(ProviderError::Timeout)),
                    None => fetch.await,
                }
            };
            match cancel {
                Some(token) => tokio::select! {
                    result = limited => result,
                    _ = token.cancelled() => Err(ProviderError::Cancelled),
                },
                None => limited.await,
            }
        };
        let result = result.and_then(|reply| {
            if reply.trim().is_empty() {
                Err(ProviderError::InvalidResponse("empty reply".to_string()))
            } else {
                Ok(reply)
            }
        });

        let outcome = match result {
            Ok(reply) => {
                debug!("Reply received: {} chars", reply.chars().count());
                session.record_assistant_turn(reply.clone());
                sink.on_reply_end(&reply);
                TurnOutcome {
                    reply,
                    status: TurnStatus::Replied,
                }
            }
            Err(ProviderError::Cancelled) if !partial.is_empty() => {
                info!("Reply cancelled after {} chars", partial.chars().count());
                let reply = format!("{}{}", partial, CANCELLED_MARKER);
                session.record_assistant_turn(reply.clone());
                sink.on_reply_end(&reply);
                TurnOutcome {
                    reply,
                    status: TurnStatus::Cancelled,
                }
            }
            Err(e) => {
                warn!("Provider call failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    event_types::PROVIDER_ERROR,
                    serde_json::json!({
                        "provider": self.provider.name(),
                        "error": e.to_string(),
                    }),
                ));
                let status = if e.is_cancelled() {
                    TurnStatus::Cancelled
                } else {
                    TurnStatus::Failed
                };
                let reply = format!("{}{}", ERROR_PREFIX, e);
                session.record_provider_failure(&e);
                sink.on_reply_failed(&reply);
                TurnOutcome { reply, status }
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            event_types::ASSISTANT_TURN,
            serde_json::json!({
                "model": config.model.to_string(),
                "status": format!("{:?}", outcome.status).to_lowercase(),
                "bytes": outcome.reply.len(),
                "text": outcome.reply,
            }),
        ));

        Ok(outcome)
    }

    /// Call the provider. Streamed text is forwarded to `sink` and mirrored
    /// into `partial` so a cancelled turn can keep what already arrived.
    async fn fetch(
        &self,
        messages: &[Message],
        config: &RequestConfig,
        sink: &mut dyn OutputSink,
        partial: &mut String,
    ) -> Result<String, ProviderError> {
        if !config.stream {
            return self.provider.complete(messages, config).await;
        }

        let mut handle = self.provider.complete_streaming(messages, config).await?;
        while let Some(event) = handle.next_event().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    sink.on_fragment(&chunk);
                    partial.push_str(&chunk);
                }
                StreamEvent::Completed(text) => {
                    if partial.is_empty() {
                        // Adapter without incremental output
                        if !text.is_empty() {
                            sink.on_fragment(&text);
                        }
                        return Ok(text);
                    }
                    return Ok(partial.clone());
                }
                StreamEvent::Error(e) => return Err(ProviderError::Stream(e)),
            }
        }

        if partial.is_empty() {
            Err(ProviderError::StreamClosed)
        } else {
            Ok(partial.clone())
        }
    }
}
