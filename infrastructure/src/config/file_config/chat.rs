//! Chat configuration from TOML (`[chat]` section)

use groq_chat_domain::request::config::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE};
use groq_chat_domain::{DEFAULT_SYSTEM_PROMPT, Model, RequestConfig};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
///
/// ```toml
/// [chat]
/// model = "llama-3.1-8b-instant"
/// temperature = 0.2
/// max_tokens = 2048
/// stream = true
/// system_prompt = "You are a terse assistant."
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
    /// System instruction for new sessions (default: built-in prompt)
    pub system_prompt: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            stream: false,
            system_prompt: None,
        }
    }
}

impl FileChatConfig {
    pub fn to_request_config(&self) -> RequestConfig {
        RequestConfig::default()
            .with_model(self.model.trim())
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_tokens)
            .with_stream(self.stream)
    }

    pub fn system_prompt(&self) -> &str {
        self.system_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_request_defaults() {
        assert_eq!(
            FileChatConfig::default().to_request_config(),
            RequestConfig::default()
        );
    }

    #[test]
    fn test_to_request_config() {
        let config = FileChatConfig {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.2,
            max_tokens: 2048,
            stream: true,
            system_prompt: None,
        };
        let request = config.to_request_config();
        assert_eq!(request.model, Model::Llama318bInstant);
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_output_tokens, 2048);
        assert!(request.stream);
    }

    #[test]
    fn test_blank_system_prompt_falls_back() {
        let config = FileChatConfig {
            system_prompt: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.system_prompt(), DEFAULT_SYSTEM_PROMPT);

        let config = FileChatConfig {
            system_prompt: Some("Be brief.".to_string()),
            ..Default::default()
        };
        assert_eq!(config.system_prompt(), "Be brief.");
    }
}
