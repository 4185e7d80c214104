//! Spinner shown while a whole (non-streamed) reply is pending

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(80);

/// Wraps an indicatif spinner drawn on stderr.
///
/// indicatif hides the bar when stderr is not a terminal, so piped runs
/// stay clean.
pub struct ReplySpinner {
    bar: ProgressBar,
}

impl ReplySpinner {
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} {elapsed:.dim}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.into());
        bar.enable_steady_tick(TICK);
        Self { bar }
    }

    /// Remove the spinner line.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
