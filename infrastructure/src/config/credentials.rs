//! Credential resolution and startup configuration errors.

use groq_chat_domain::GroqProviderConfig;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Fatal configuration problems detected before any session exists.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Missing API key: set the {env_var} environment variable (or add it to a .env file)"
    )]
    MissingCredential { env_var: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load a `.env` file from the current directory or its parents, if any.
///
/// Variables already set in the environment take precedence.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenv::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) => {
            debug!("No .env file loaded: {}", e);
            None
        }
    }
}

/// Resolve the API key from config or the process environment.
pub fn resolve_api_key(config: &GroqProviderConfig) -> Result<String, ConfigError> {
    resolve_api_key_with(config, |name| std::env::var(name).ok())
}

fn resolve_api_key_with<F>(config: &GroqProviderConfig, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    config
        .resolve_api_key(lookup)
        .ok_or_else(|| ConfigError::MissingCredential {
            env_var: config.api_key_env.clone(),
        })
}
