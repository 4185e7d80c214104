//! Configuration loading
//!
//! TOML files and `GROQ_CHAT_*` environment variables merged with figment,
//! plus credential resolution for the Groq API key.

pub mod credentials;
pub mod file_config;
pub mod loader;

pub use credentials::{ConfigError, load_dotenv, resolve_api_key};
pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileChatConfig, FileConfig, FileGroqConfig,
    FileLoggingConfig, FileOutputConfig, FileProvidersConfig, FileReplConfig, Severity,
};
pub use loader::ConfigLoader;
