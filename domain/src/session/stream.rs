//! Streaming events for incremental replies.
//!
//! [`StreamEvent`] represents individual events in a streaming completion,
//! enabling real-time display of model output as it's generated. The
//! session itself only ever sees the concatenated text.

/// An event in a streaming completion.
///
/// A well-formed stream is zero or more `Delta`s followed by exactly one
/// terminal event (`Completed` or `Error`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment from the model.
    Delta(String),
    /// The complete reply text (signals stream end).
    Completed(String),
    /// An error that occurred mid-stream (signals stream end).
    Error(String),
}
