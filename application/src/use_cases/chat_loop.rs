//! Host loop.
//!
//! Reads lines from an [`InputSource`], dispatches reserved commands, and
//! runs every other line as a chat turn. The loop is written once; line-mode
//! and streaming front-ends only differ in the [`OutputSink`] they plug in.

use crate::ports::console::{InputError, InputEvent, InputSource, OutputSink};
use crate::ports::conversation_logger::{ConversationEvent, event_types};
use crate::ports::transcript_exporter::TranscriptExporter;
use crate::use_cases::run_chat_turn::RunChatTurnUseCase;
use groq_chat_domain::{ConversationSession, DomainError, HostCommand, RequestConfig, RoleLabels};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Prompt shown before each read.
pub const DEFAULT_PROMPT: &str = "You: ";

#[derive(Error, Debug)]
pub enum ChatLoopError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Interactive chat loop over any input source and output sink.
pub struct ChatLoop<I: InputSource, O: OutputSink> {
    input: I,
    output: O,
    session: ConversationSession,
    request: RequestConfig,
    turn: RunChatTurnUseCase,
    exporter: Option<Arc<dyn TranscriptExporter>>,
    labels: RoleLabels,
    prompt: String,
}

impl<I: InputSource, O: OutputSink> ChatLoop<I, O> {
    pub fn new(
        input: I,
        output: O,
        session: ConversationSession,
        request: RequestConfig,
        turn: RunChatTurnUseCase,
    ) -> Self {
        Self {
            input,
            output,
            session,
            request,
            turn,
            exporter: None,
            labels: RoleLabels::default(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Enable `/export`.
    pub fn with_exporter(mut self, exporter: Arc<dyn TranscriptExporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    pub fn with_labels(mut self, labels: RoleLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Run until quit or end of input and hand back the final session.
    pub async fn run(mut self) -> Result<ConversationSession, ChatLoopError> {
        self.request.validate()?;
        info!(
            "Chat loop started (provider: {}, model: {}, stream: {})",
            self.turn.provider_name(),
            self.request.model,
            self.request.stream
        );

        loop {
            match self.input.read_input(&self.prompt)? {
                InputEvent::Line(line) => {
                    if self.handle_line(&line).await == Flow::Stop {
                        break;
                    }
                }
                InputEvent::Interrupted => {
                    debug!("Input interrupted, re-prompting");
                }
                InputEvent::EndOfInput => {
                    self.output.on_goodbye();
                    break;
                }
            }
        }

        info!("Chat loop finished: {}", self.session.stats());
        Ok(self.session)
    }

    async fn handle_line(&mut self, line: &str) -> Flow {
        match HostCommand::parse(line) {
            HostCommand::Quit => {
                self.output.on_goodbye();
                return Flow::Stop;
            }
            HostCommand::Clear => {
                self.session.clear();
                self.turn
                    .conversation_logger()
                    .log(ConversationEvent::bare(event_types::SESSION_CLEARED));
                self.output.on_cleared();
            }
            HostCommand::Help => self.output.on_help(),
            HostCommand::Stats => self.output.on_stats(&self.session.stats()),
            HostCommand::Export(path) => self.export(path.as_deref()),
            HostCommand::Empty => {}
            HostCommand::Message(text) => {
                self.input.add_history(&text);
                self.run_turn(&text).await;
            }
        }
        Flow::Continue
    }

    async fn run_turn(&mut self, text: &str) {
        let token = CancellationToken::new();
        let watcher = self
            .turn
            .behavior()
            .cancel_on_interrupt
            .then(|| spawn_interrupt_watcher(token.clone()));

        let result = self
            .turn
            .execute_cancellable(
                &mut self.session,
                text,
                &self.request,
                &mut self.output,
                Some(&token),
            )
            .await;

        if let Some(watcher) = watcher {
            watcher.abort();
        }

        match result {
            Ok(outcome) => debug!("Turn finished: {:?}", outcome.status),
            Err(e) => {
                warn!("Turn rejected: {}", e);
                self.output.on_warning(&e.to_string());
            }
        }
    }

    fn export(&mut self, path: Option<&Path>) {
        let Some(exporter) = self.exporter.clone() else {
            self.output.on_warning("Export is not available");
            return;
        };
        if self.session.is_empty() {
            self.output.on_notice("Nothing to export yet");
            return;
        }

        let labels = &self.labels;
        let transcript = self.session.export_transcript(|role| labels.label(role));
        match exporter.export(&transcript, path) {
            Ok(written) => {
                info!("Transcript exported to {}", written.display());
                self.turn.conversation_logger().log(ConversationEvent::new(
                    event_types::TRANSCRIPT_EXPORTED,
                    serde_json::json!({
                        "path": written.display().to_string(),
                        "turns": self.session.turn_count(),
                    }),
                ));
                self.output
                    .on_notice(&format!("Transcript saved to {}", written.display()));
            }
            Err(e) => {
                warn!("Transcript export failed: {}", e);
                self.output.on_warning(&e.to_string());
            }
        }
    }
}

/// Cancel `token` on the first Ctrl-C. Abort the handle once the turn ends.
fn spawn_interrupt_watcher(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, cancelling reply");
            token.cancel();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorConfig;
    use crate::ports::completion_provider::{CompletionProvider, ProviderError};
    use crate::ports::transcript_exporter::ExportError;
    use async_trait::async_trait;
    use groq_chat_domain::{Message, Model, TurnStats};
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct ScriptedInput {
        events: VecDeque<InputEvent>,
        history: Vec<String>,
    }

    impl ScriptedInput {
        fn lines(lines: &[&str]) -> Self {
            Self {
                events: lines
                    .iter()
                    .map(|l| InputEvent::Line(l.to_string()))
                    .collect(),
                history: Vec::new(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn read_input(&mut self, _prompt: &str) -> Result<InputEvent, InputError> {
            Ok(self.events.pop_front().unwrap_or(InputEvent::EndOfInput))
        }

        fn add_history(&mut self, line: &str) {
            self.history.push(line.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<String>,
    }

    impl OutputSink for RecordingSink {
        fn on_reply_start(&mut self, _model: &Model) {}

        fn on_reply_end(&mut self, reply: &str) {
            self.events.push(format!("reply:{}", reply));
        }

        fn on_reply_failed(&mut self, content: &str) {
            self.events.push(format!("failed:{}", content));
        }

        fn on_notice(&mut self, notice: &str) {
            self.events.push(format!("notice:{}", notice));
        }

        fn on_warning(&mut self, warning: &str) {
            self.events.push(format!("warning:{}", warning));
        }

        fn on_cleared(&mut self) {
            self.events.push("cleared".to_string());
        }

        fn on_stats(&mut self, stats: &TurnStats) {
            self.events.push(format!("stats:{}", stats));
        }

        fn on_help(&mut self) {
            self.events.push("help".to_string());
        }

        fn on_goodbye(&mut self) {
            self.events.push("goodbye".to_string());
        }
    }

    /// Replies "re: <last user text>", or fails when the text is "fail".
    struct EchoProvider {
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl CompletionProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            messages: &[Message],
            _config: &RequestConfig,
        ) -> Result<String, ProviderError> {
            *self.calls.lock().unwrap() += 1;
            let last = &messages.last().unwrap().content;
            if last == "fail" {
                return Err(ProviderError::Connection("refused".into()));
            }
            Ok(format!("re: {}", last))
        }
    }

    #[derive(Default)]
    struct MemoryExporter {
        written: Mutex<Vec<(String, Option<PathBuf>)>>,
    }

    impl TranscriptExporter for MemoryExporter {
        fn export(&self, transcript: &str, path: Option<&Path>) -> Result<PathBuf, ExportError> {
            self.written
                .lock()
                .unwrap()
                .push((transcript.to_string(), path.map(Path::to_path_buf)));
            Ok(path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("chat-transcript.txt")))
        }
    }

    struct FailingExporter;

    impl TranscriptExporter for FailingExporter {
        fn export(&self, _transcript: &str, path: Option<&Path>) -> Result<PathBuf, ExportError> {
            Err(ExportError::Write {
                path: path.map(Path::to_path_buf).unwrap_or_default(),
                message: "read-only".into(),
            })
        }
    }

    fn chat_loop(lines: &[&str]) -> (ChatLoop<ScriptedInput, RecordingSink>, Arc<EchoProvider>) {
        let provider = Arc::new(EchoProvider {
            calls: Mutex::new(0),
        });
        let turn = RunChatTurnUseCase::new(provider.clone())
            .with_behavior(BehaviorConfig::default().with_cancel_on_interrupt(false));
        let chat = ChatLoop::new(
            ScriptedInput::lines(lines),
            RecordingSink::default(),
            ConversationSession::new("S"),
            RequestConfig::default(),
            turn,
        );
        (chat, provider)
    }

    #[tokio::test]
    async fn test_messages_until_end_of_input() {
        let (chat, provider) = chat_loop(&["Hi", "How are you?"]);
        let session = chat.run().await.unwrap();

        assert_eq!(*provider.calls.lock().unwrap(), 2);
        assert_eq!(session.turn_count(), 4);
        assert_eq!(
            session.export_transcript(groq_chat_domain::default_label),
            "User: Hi\n\nAssistant: re: Hi\n\nUser: How are you?\n\nAssistant: re: How are you?"
        );
    }

    #[tokio::test]
    async fn test_exit_stops_before_remaining_lines() {
        let (chat, provider) = chat_loop(&["Hi", "  EXIT  ", "never sent"]);
        let session = chat.run().await.unwrap();

        assert_eq!(*provider.calls.lock().unwrap(), 1);
        assert_eq!(session.user_turn_count(), 1);
        assert!(session.turns().iter().all(|m| m.content != "never sent"));
        assert_eq!(
            session.export_transcript(groq_chat_domain::default_label),
            "User: Hi\n\nAssistant: re: Hi"
        );
    }

    #[tokio::test]
    async fn test_quit_returns_stop() {
        let (mut chat, provider) = chat_loop(&[]);
        assert_eq!(chat.handle_line("Hi").await, Flow::Continue);
        assert_eq!(chat.handle_line("QUIT").await, Flow::Stop);
        assert_eq!(*provider.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_quit_says_goodbye() {
        let (mut chat, _) = chat_loop(&[]);
        chat.handle_line("exit").await;
        assert_eq!(chat.output.events, vec!["goodbye"]);
    }

    #[tokio::test]
    async fn test_clear_resets_session() {
        let (chat, provider) = chat_loop(&["Hi", "Clear", "again"]);
        let session = chat.run().await.unwrap();

        assert_eq!(*provider.calls.lock().unwrap(), 2);
        assert_eq!(
            session.messages(),
            &[
                Message::system("S"),
                Message::user("again"),
                Message::assistant("re: again"),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_lines_are_skipped() {
        let (mut chat, provider) = chat_loop(&[]);
        chat.handle_line("").await;
        chat.handle_line("   ").await;

        assert_eq!(*provider.calls.lock().unwrap(), 0);
        assert!(chat.session().is_empty());
        assert!(chat.output.events.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_loop_running() {
        let (mut chat, _) = chat_loop(&[]);
        chat.handle_line("fail").await;
        chat.handle_line("ok").await;

        assert_eq!(
            chat.output.events,
            vec![
                "failed:Error: Connection error: refused",
                "reply:re: ok",
            ]
        );
        assert_eq!(chat.session().turn_count(), 4);
        assert!(chat.session().messages()[2].is_error());
    }

    #[tokio::test]
    async fn test_interrupted_read_reprompts() {
        let (mut chat, provider) = chat_loop(&[]);
        chat.input.events = VecDeque::from(vec![
            InputEvent::Interrupted,
            InputEvent::Line("Hi".to_string()),
        ]);
        let session = chat.run().await.unwrap();

        assert_eq!(*provider.calls.lock().unwrap(), 1);
        assert_eq!(session.turn_count(), 2);
    }

    #[tokio::test]
    async fn test_history_records_messages_only() {
        let (mut chat, _) = chat_loop(&[]);
        chat.handle_line("Hi").await;
        chat.handle_line("/stats").await;
        chat.handle_line("clear").await;

        assert_eq!(chat.input.history, vec!["Hi"]);
    }

    #[tokio::test]
    async fn test_stats_and_help() {
        let (mut chat, _) = chat_loop(&[]);
        chat.handle_line("Hi").await;
        chat.handle_line("/stats").await;
        chat.handle_line("/HELP").await;

        assert_eq!(
            &chat.output.events[1..],
            &["stats:2 turns (1 user, 1 assistant)", "help"]
        );
    }

    #[tokio::test]
    async fn test_export_uses_labels_and_path() {
        let exporter = Arc::new(MemoryExporter::default());
        let (chat, _) = chat_loop(&[]);
        let mut chat = chat
            .with_exporter(exporter.clone())
            .with_labels(RoleLabels::new("Me", "Bot"));

        chat.handle_line("Hi").await;
        chat.handle_line("/export out/chat.txt").await;

        let written = exporter.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, "Me: Hi\n\nBot: re: Hi");
        assert_eq!(written[0].1, Some(PathBuf::from("out/chat.txt")));
        assert_eq!(
            chat.output.events.last().unwrap(),
            "notice:Transcript saved to out/chat.txt"
        );
    }

    #[tokio::test]
    async fn test_export_empty_session() {
        let exporter = Arc::new(MemoryExporter::default());
        let (chat, _) = chat_loop(&[]);
        let mut chat = chat.with_exporter(exporter.clone());

        chat.handle_line("/export").await;

        assert!(exporter.written.lock().unwrap().is_empty());
        assert_eq!(chat.output.events, vec!["notice:Nothing to export yet"]);
    }

    #[tokio::test]
    async fn test_export_failure_is_reported() {
        let (chat, _) = chat_loop(&[]);
        let mut chat = chat.with_exporter(Arc::new(FailingExporter));

        chat.handle_line("Hi").await;
        chat.handle_line("/export /nope.txt").await;

        assert_eq!(
            chat.output.events.last().unwrap(),
            "warning:Failed to write transcript to /nope.txt: read-only"
        );
    }

    #[tokio::test]
    async fn test_export_without_exporter() {
        let (mut chat, _) = chat_loop(&[]);
        chat.handle_line("Hi").await;
        chat.handle_line("/export").await;

        assert_eq!(
            chat.output.events.last().unwrap(),
            "warning:Export is not available"
        );
    }

    #[tokio::test]
    async fn test_invalid_request_config_fails_before_reading() {
        let (mut chat, provider) = chat_loop(&["Hi"]);
        chat.request = RequestConfig::default().with_max_output_tokens(0);

        let err = chat.run().await.err().unwrap();
        assert!(matches!(err, ChatLoopError::Domain(_)));
        assert_eq!(*provider.calls.lock().unwrap(), 0);
    }
}
