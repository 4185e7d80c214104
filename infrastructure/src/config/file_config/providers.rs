//! Provider configuration from TOML (`[providers]` section)

use groq_chat_domain::GroqProviderConfig;
use serde::{Deserialize, Serialize};

/// Groq API provider configuration (`[providers.groq]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Per-request timeout in seconds; 0 disables it.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        let defaults = GroqProviderConfig::default();
        Self {
            api_key_env: defaults.api_key_env,
            api_key: defaults.api_key,
            base_url: defaults.base_url,
            timeout_seconds: defaults.timeout_seconds,
        }
    }
}

impl FileGroqConfig {
    pub fn to_provider_config(&self) -> GroqProviderConfig {
        GroqProviderConfig {
            api_key_env: self.api_key_env.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: self.timeout_seconds.filter(|s| *s > 0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub groq: FileGroqConfig,
}
