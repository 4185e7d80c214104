//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

/// Groq API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroqProviderConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Per-request timeout in seconds (`None` = no timeout).
    pub timeout_seconds: Option<u64>,
}

impl Default for GroqProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            timeout_seconds: Some(60),
        }
    }
}

impl GroqProviderConfig {
    /// Resolve the API key: a direct key wins, then the named variable.
    ///
    /// `lookup` reads a variable by name (normally `std::env::var`).
    /// Blank values count as missing.
    pub fn resolve_api_key<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GroqProviderConfig::default();
        assert_eq!(config.api_key_env, "GROQ_API_KEY");
        assert!(config.base_url.starts_with("https://api.groq.com"));
    }

    #[test]
    fn test_direct_key_wins() {
        let config = GroqProviderConfig {
            api_key: Some("direct".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("direct"));
    }

    #[test]
    fn test_env_lookup_uses_configured_name() {
        let config = GroqProviderConfig {
            api_key_env: "MY_KEY".to_string(),
            ..Default::default()
        };
        let key = config.resolve_api_key(|name| (name == "MY_KEY").then(|| "k".to_string()));
        assert_eq!(key.as_deref(), Some("k"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = GroqProviderConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(|_| Some(String::new())), None);
    }
}
