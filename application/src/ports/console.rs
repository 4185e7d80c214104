//! Console ports: where input comes from and where output goes.
//!
//! The host loop is written once against [`InputSource`] and
//! [`OutputSink`]. Line-mode and incremental-display front-ends differ
//! only in which implementations they plug in.

use groq_chat_domain::{Model, TurnStats};
use thiserror::Error;

/// One read from an input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of text (untrimmed).
    Line(String),
    /// The user interrupted the read (Ctrl-C); re-prompt.
    Interrupted,
    /// No more input (Ctrl-D, closed pipe, exhausted script).
    EndOfInput,
}

/// Errors raised by an input source
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input error: {0}")]
    Io(String),
}

/// Source of raw user input.
pub trait InputSource {
    /// Show `prompt` and read the next line.
    fn read_input(&mut self, prompt: &str) -> Result<InputEvent, InputError>;

    /// Remember a line the user sent (for readline-style history).
    fn add_history(&mut self, _line: &str) {}
}

/// Display surface for the host loop.
///
/// For each chat turn the loop calls `on_reply_start`, then zero or more
/// `on_fragment` (streaming only), then exactly one of `on_reply_end` or
/// `on_reply_failed`.
pub trait OutputSink {
    /// A request for `model` has been sent.
    fn on_reply_start(&mut self, model: &Model);

    /// A fragment of a streamed reply arrived.
    fn on_fragment(&mut self, _fragment: &str) {}

    /// The reply is complete; `reply` is the full text that was recorded.
    fn on_reply_end(&mut self, reply: &str);

    /// The provider call failed; `content` is what was recorded in its place.
    fn on_reply_failed(&mut self, content: &str);

    /// Informational message from the host loop.
    fn on_notice(&mut self, notice: &str);

    /// Non-fatal problem the user should see.
    fn on_warning(&mut self, warning: &str);

    fn on_cleared(&mut self) {
        self.on_notice("[Conversation cleared]");
    }

    fn on_stats(&mut self, stats: &TurnStats) {
        self.on_notice(&stats.to_string());
    }

    fn on_help(&mut self) {}

    fn on_goodbye(&mut self) {
        self.on_notice("Goodbye! Thanks for chatting!");
    }
}
