//! Console output sinks
//!
//! [`LineSink`] prints each reply once it is complete, with an optional
//! spinner while waiting. [`StreamingSink`] prints fragments as they
//! arrive. Both write to any `io::Write` (stdout in the binary).

use crate::config::OutputConfig;
use crate::output::formatter::ConsoleFormatter;
use crate::progress::ReplySpinner;
use colored::Colorize;
use groq_chat_application::OutputSink;
use groq_chat_domain::{Model, TurnStats};
use std::io::{self, Stdout, Write};

/// Shared line printing for both sinks.
struct Printer<W: Write> {
    out: W,
    config: OutputConfig,
}

impl<W: Write> Printer<W> {
    fn assistant_prefix(&self) -> String {
        let label = format!("{}:", self.config.labels.assistant);
        if self.config.color {
            label.green().bold().to_string()
        } else {
            label
        }
    }

    fn failure(&self, content: &str) -> String {
        if self.config.color {
            content.red().to_string()
        } else {
            content.to_string()
        }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    fn notice(&mut self, notice: &str) {
        let text = if self.config.color {
            notice.dimmed().to_string()
        } else {
            notice.to_string()
        };
        self.line(&text);
    }

    fn warning(&mut self, warning: &str) {
        let text = format!("Warning: {}", warning);
        let text = if self.config.color {
            text.yellow().to_string()
        } else {
            text
        };
        self.line(&text);
    }

    fn help(&mut self) {
        let text = ConsoleFormatter::help(self.config.color);
        let _ = write!(self.out, "{}", text);
        self.line("");
    }

    fn stats(&mut self, stats: &TurnStats) {
        let text = ConsoleFormatter::stats(stats, self.config.color);
        self.line(&text);
    }
}

/// Prints whole replies.
pub struct LineSink<W: Write = Stdout> {
    printer: Printer<W>,
    spinner: Option<ReplySpinner>,
}

impl LineSink<Stdout> {
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self {
            printer: Printer { out, config },
            spinner: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.printer.out
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }
    }
}

impl<W: Write> OutputSink for LineSink<W> {
    fn on_reply_start(&mut self, model: &Model) {
        if self.printer.config.show_progress {
            self.spinner = Some(ReplySpinner::start(format!("Waiting for {}...", model)));
        }
    }

    fn on_reply_end(&mut self, reply: &str) {
        self.stop_spinner();
        let text = format!("{} {}\n", self.printer.assistant_prefix(), reply);
        self.printer.line(&text);
    }

    fn on_reply_failed(&mut self, content: &str) {
        self.stop_spinner();
        let text = format!(
            "{} {}\n",
            self.printer.assistant_prefix(),
            self.printer.failure(content)
        );
        self.printer.line(&text);
    }

    fn on_notice(&mut self, notice: &str) {
        self.printer.notice(notice);
    }

    fn on_warning(&mut self, warning: &str) {
        self.stop_spinner();
        self.printer.warning(warning);
    }

    fn on_stats(&mut self, stats: &TurnStats) {
        self.printer.stats(stats);
    }

    fn on_help(&mut self) {
        self.printer.help();
    }
}

/// Prints replies incrementally as fragments arrive.
pub struct StreamingSink<W: Write = Stdout> {
    printer: Printer<W>,
    /// Text already shown for the current reply.
    shown: String,
}

impl StreamingSink<Stdout> {
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> StreamingSink<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self {
            printer: Printer { out, config },
            shown: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.printer.out
    }
}

impl<W: Write> OutputSink for StreamingSink<W> {
    fn on_reply_start(&mut self, _model: &Model) {
        self.shown.clear();
        let prefix = self.printer.assistant_prefix();
        let _ = write!(self.printer.out, "{} ", prefix);
        let _ = self.printer.out.flush();
    }

    fn on_fragment(&mut self, fragment: &str) {
        let _ = write!(self.printer.out, "{}", fragment);
        let _ = self.printer.out.flush();
        self.shown.push_str(fragment);
    }

    fn on_reply_end(&mut self, reply: &str) {
        // Print whatever the fragments did not cover (e.g. a cancel marker)
        let rest = reply.strip_prefix(self.shown.as_str()).unwrap_or_default();
        self.printer.line(&format!("{}\n", rest));
        self.shown.clear();
    }

    fn on_reply_failed(&mut self, content: &str) {
        if !self.shown.is_empty() {
            self.printer.line("");
        }
        let text = format!("{}\n", self.printer.failure(content));
        self.printer.line(&text);
        self.shown.clear();
    }

    fn on_notice(&mut self, notice: &str) {
        self.printer.notice(notice);
    }

    fn on_warning(&mut self, warning: &str) {
        self.printer.warning(warning);
    }

    fn on_stats(&mut self, stats: &TurnStats) {
        self.printer.stats(stats);
    }

    fn on_help(&mut self) {
        self.printer.help();
    }
}
