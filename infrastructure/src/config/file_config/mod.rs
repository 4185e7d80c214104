//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types at the
//! edges (`to_request_config`, `to_provider_config`, `role_labels`).

mod chat;
mod logging;
mod output;
mod providers;
mod repl;

pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use providers::{FileGroqConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use groq_chat_domain::request::config::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    EmptyValue { field: String },
    OutOfRange { field: String },
    InvalidUrl { field: String },
    PlaintextSecret { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model and sampling settings
    pub chat: FileChatConfig,
    /// Provider settings (endpoint, credentials, timeout)
    pub providers: FileProvidersConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the chat unusable (the request would be rejected);
    /// warnings are reported and startup continues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Request parameters
        if self.chat.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "chat.model".to_string(),
                },
                "chat.model: model name is empty",
            ));
        }
        let temperature = self.chat.temperature;
        if !temperature.is_finite() || !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature)
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "chat.temperature".to_string(),
                },
                format!(
                    "chat.temperature: {} is outside {}..={}",
                    temperature, MIN_TEMPERATURE, MAX_TEMPERATURE
                ),
            ));
        }
        if self.chat.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "chat.max_tokens".to_string(),
                },
                "chat.max_tokens: must be greater than 0",
            ));
        }

        // 2. Provider
        let groq = &self.providers.groq;
        if !groq.base_url.starts_with("http://") && !groq.base_url.starts_with("https://") {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "providers.groq.base_url".to_string(),
                },
                format!(
                    "providers.groq.base_url: '{}' is not an http(s) URL",
                    groq.base_url
                ),
            ));
        }
        if groq.api_key_env.trim().is_empty() && groq.api_key.is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "providers.groq.api_key_env".to_string(),
                },
                "providers.groq.api_key_env: empty and no api_key is set",
            ));
        }
        if groq.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::PlaintextSecret {
                    field: "providers.groq.api_key".to_string(),
                },
                format!(
                    "providers.groq.api_key: API key stored in config file; prefer the {} environment variable",
                    groq.api_key_env
                ),
            ));
        }

        // 3. Output labels
        for (field, value) in [
            ("output.user_label", &self.output.user_label),
            ("output.assistant_label", &self.output.assistant_label),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: empty label", field),
                ));
            }
        }

        issues
    }
}
