//! Server-sent events reader for streamed completions.
//!
//! Reads `data: {json}` lines, forwards each non-empty delta as a
//! [`StreamEvent::Delta`], and stops at `data: [DONE]`.

use super::error::GroqError;
use super::protocol::ChatCompletionChunk;
use groq_chat_domain::StreamEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, trace};

const DONE_MARKER: &str = "[DONE]";

/// How a stream ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseOutcome {
    /// `[DONE]` (or end of body) reached; carries the full text.
    Finished(String),
    /// The consumer dropped its receiver; reading stopped early.
    ReceiverClosed,
}

/// Read an SSE body, forwarding deltas to `tx`.
///
/// Does not send the terminal event; the caller decides between
/// `Completed` and `Error` from the returned value.
pub async fn forward_sse<R>(reader: R, tx: &mpsc::Sender<StreamEvent>) -> Result<SseOutcome, GroqError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut full_text = String::new();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| GroqError::Stream(e.to_string()))?
    {
        let Some(data) = line.strip_prefix("data:") else {
            // Blank separators, comments, `event:`/`id:` fields
            continue;
        };
        let data = data.trim();
        if data.is_empty() {
            continue;
        }
        if data == DONE_MARKER {
            debug!("Stream finished: {} chars", full_text.chars().count());
            return Ok(SseOutcome::Finished(full_text));
        }

        let chunk: ChatCompletionChunk = serde_json::from_str(data)?;
        if let Some(error) = chunk.error {
            debug!(
                "Provider error after {} chars: {}",
                full_text.chars().count(),
                error.message
            );
            return Err(GroqError::Stream(error.message));
        }

        let delta = chunk.delta_text();
        if delta.is_empty() {
            continue;
        }
        trace!("delta: {} bytes", delta.len());
        full_text.push_str(&delta);
        if tx.send(StreamEvent::Delta(delta)).await.is_err() {
            debug!("Stream receiver dropped, stopping");
            return Ok(SseOutcome::ReceiverClosed);
        }
    }

    if full_text.is_empty() {
        return Err(GroqError::Stream(
            "stream ended before any content".to_string(),
        ));
    }
    debug!("Stream ended without [DONE] marker");
    Ok(SseOutcome::Finished(full_text))
}
