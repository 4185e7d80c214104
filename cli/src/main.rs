//! CLI entrypoint for groq-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use groq_chat_application::{
    BehaviorConfig, ChatLoop, ConversationLogger, InputSource, NoConversationLogger, OutputSink,
    RunChatTurnUseCase, TranscriptExporter,
};
use groq_chat_domain::{ConversationSession, RequestConfig};
use groq_chat_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, FileTranscriptExporter, GroqProvider,
    JsonlConversationLogger, Severity, load_dotenv, resolve_api_key,
};
use groq_chat_presentation::{
    Cli, ConsoleFormatter, LineSink, OutputConfig, ReadlineInput, ReplConfig, StreamingSink,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli)?;

    info!("Starting groq-chat");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.list_models {
        print!("{}", ConsoleFormatter::model_list(!cli.no_color));
        return Ok(ExitCode::SUCCESS);
    }

    load_dotenv();

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).map_err(ConfigError::from)?
    };
    apply_cli_overrides(&mut config, &cli);
    check_config(&config)?;

    // === Dependency Injection ===
    let groq = config.providers.groq.to_provider_config();
    let api_key = resolve_api_key(&groq)?;
    let provider = Arc::new(GroqProvider::from_config(&groq, api_key)?);

    let conversation_log = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log_path());
    let conversation_logger: Arc<dyn ConversationLogger> = match conversation_log
        .as_deref()
        .and_then(JsonlConversationLogger::try_open)
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let turn = RunChatTurnUseCase::new(provider)
        .with_behavior(BehaviorConfig::from_timeout_seconds(groq.timeout_seconds))
        .with_conversation_logger(conversation_logger);
    let request = config.chat.to_request_config();
    request.validate()?;
    let session = ConversationSession::new(config.chat.system_prompt());
    let exporter: Arc<dyn TranscriptExporter> = Arc::new(FileTranscriptExporter::in_current_dir());

    let output = OutputConfig {
        color: config.output.color && !cli.no_color,
        show_progress: config.repl.show_progress && !cli.quiet,
        labels: config.output.role_labels(),
    };

    let (session, exit_code) = match cli.question.as_deref() {
        Some(question) => run_one_shot(&turn, session, question, &request, &output).await?,
        None => {
            let repl = ReplConfig {
                history_file: config.repl.history_path(),
            };
            let input = ReadlineInput::new(&repl)?;
            print!(
                "{}",
                ConsoleFormatter::welcome(&request.model, request.stream, output.color)
            );
            println!();

            let session = if request.stream {
                let sink = StreamingSink::stdout(output.clone());
                run_chat(input, sink, session, request, turn, exporter.clone(), &output).await?
            } else {
                let sink = LineSink::stdout(output.clone());
                run_chat(input, sink, session, request, turn, exporter.clone(), &output).await?
            };
            (session, ExitCode::SUCCESS)
        }
    };

    if let Some(path) = &cli.export_on_exit {
        export_on_exit(exporter.as_ref(), &session, path, &output)?;
    }

    info!("Exiting: {}", session.stats());
    Ok(exit_code)
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr so they never interleave with the chat on stdout,
/// or to `--log-file` through a non-blocking writer.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::new(cli.log_level());

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// CLI flags take precedence over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.chat.model = model.clone();
    }
    if let Some(temperature) = cli.temperature {
        config.chat.temperature = temperature;
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.chat.max_tokens = max_tokens;
    }
    if let Some(stream) = cli.stream_override() {
        config.chat.stream = stream;
    }
    if let Some(system_prompt) = &cli.system_prompt {
        config.chat.system_prompt = Some(system_prompt.clone());
    }
}

/// Report warnings and stop on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue.message);
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        return Err(ConfigError::Invalid(errors.join("; ")).into());
    }
    Ok(())
}

async fn run_one_shot(
    turn: &RunChatTurnUseCase,
    mut session: ConversationSession,
    question: &str,
    request: &RequestConfig,
    output: &OutputConfig,
) -> Result<(ConversationSession, ExitCode)> {
    let outcome = if request.stream {
        let mut sink = StreamingSink::stdout(output.clone());
        turn.execute(&mut session, question, request, &mut sink).await?
    } else {
        let mut sink = LineSink::stdout(output.clone());
        turn.execute(&mut session, question, request, &mut sink).await?
    };

    let code = if outcome.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };
    Ok((session, code))
}

async fn run_chat<I: InputSource, O: OutputSink>(
    input: I,
    sink: O,
    session: ConversationSession,
    request: RequestConfig,
    turn: RunChatTurnUseCase,
    exporter: Arc<dyn TranscriptExporter>,
    output: &OutputConfig,
) -> Result<ConversationSession> {
    let prompt = format!("{}: ", output.labels.user);
    let session = ChatLoop::new(input, sink, session, request, turn)
        .with_exporter(exporter)
        .with_labels(output.labels.clone())
        .with_prompt(prompt)
        .run()
        .await?;
    Ok(session)
}

fn export_on_exit(
    exporter: &dyn TranscriptExporter,
    session: &ConversationSession,
    path: &Path,
    output: &OutputConfig,
) -> Result<()> {
    if session.is_empty() {
        info!("Nothing to export on exit");
        return Ok(());
    }
    let transcript = session.export_transcript(|role| output.labels.label(role));
    let written = exporter.export(&transcript, Some(path))?;
    eprintln!("Transcript saved to {}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use groq_chat_application::{CompletionProvider, ProviderError};
    use groq_chat_domain::Message;

    struct CannedProvider;

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            _messages: &[Message],
            _config: &RequestConfig,
        ) -> Result<String, ProviderError> {
            Ok("Hello!".to_string())
        }
    }

    #[tokio::test]
    async fn test_one_shot_then_export_on_exit() {
        let turn = RunChatTurnUseCase::new(Arc::new(CannedProvider));
        let output = OutputConfig::plain();
        let (session, _) = run_one_shot(
            &turn,
            ConversationSession::new("S"),
            "Hi",
            &RequestConfig::default(),
            &output,
        )
        .await
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        let exporter = FileTranscriptExporter::new(dir.path());
        export_on_exit(&exporter, &session, &path, &output).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "User: Hi\n\nAssistant: Hello!\n"
        );
    }

    #[test]
    fn test_cli_overrides_win() {
        let cli = Cli::try_parse_from([
            "groq-chat",
            "-m",
            "qwen/qwen3-32b",
            "--max-tokens",
            "99",
            "--stream",
            "-s",
            "Be brief.",
        ])
        .unwrap();
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.chat.model, "qwen/qwen3-32b");
        assert_eq!(config.chat.max_tokens, 99);
        assert!(config.chat.stream);
        assert_eq!(config.chat.system_prompt(), "Be brief.");
        // Untouched values keep their config value
        assert_eq!(config.chat.temperature, 0.7);
    }

    #[test]
    fn test_check_config_rejects_errors() {
        let mut config = FileConfig::default();
        config.chat.temperature = -1.0;
        let err = check_config(&config).unwrap_err();
        assert!(err.to_string().contains("chat.temperature"));

        assert!(check_config(&FileConfig::default()).is_ok());
    }
}
