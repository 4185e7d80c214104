//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for groq-chat
#[derive(Parser, Debug)]
#[command(name = "groq-chat")]
#[command(author, version, about = "Terminal chat client for Groq-hosted language models")]
#[command(long_about = r#"
groq-chat keeps a running conversation with a Groq-hosted model.
Every turn sends the full conversation, so the model sees prior context.

In the chat:
  quit, exit       Leave (also Ctrl-D)
  clear            Start a fresh conversation
  /stats           Show turn counts
  /export [PATH]   Save the transcript as plain text
  /help            List commands
  Ctrl-C           Cancel the reply being generated

The API key is read from GROQ_API_KEY (a .env file is loaded if present).

Configuration files are loaded from (in priority order):
1. GROQ_CHAT_* environment variables (e.g. GROQ_CHAT_CHAT__MODEL)
2. --config <path>     Explicit config file
3. ./groq-chat.toml    Project-level config
4. ~/.config/groq-chat/config.toml   Global config

Example:
  groq-chat
  groq-chat --stream -m llama-3.1-8b-instant
  groq-chat "Explain ownership in Rust in two sentences"
"#)]
pub struct Cli {
    /// Ask a single question, print the reply and exit
    pub question: Option<String>,

    /// Model to chat with
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0 to 2.0)
    #[arg(short, long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Maximum tokens per reply
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Stream replies as they are generated
    #[arg(long, overrides_with = "no_stream")]
    pub stream: bool,

    /// Wait for whole replies
    #[arg(long, overrides_with = "stream")]
    pub no_stream: bool,

    /// System instruction for the conversation
    #[arg(short, long, value_name = "TEXT")]
    pub system_prompt: Option<String>,

    /// List known model identifiers and exit
    #[arg(long)]
    pub list_models: bool,

    /// Write the transcript to this file when the chat ends
    #[arg(long, value_name = "PATH")]
    pub export_on_exit: Option<PathBuf>,

    /// Append conversation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// `Some` when `--stream` or `--no-stream` was given.
    pub fn stream_override(&self) -> Option<bool> {
        if self.stream {
            Some(true)
        } else if self.no_stream {
            Some(false)
        } else {
            None
        }
    }

    /// Tracing filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
