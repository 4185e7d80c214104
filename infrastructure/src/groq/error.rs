//! Error types for the Groq adapter

use groq_chat_application::ProviderError;
use thiserror::Error;

/// Result type alias for Groq operations
pub type Result<T> = std::result::Result<T, GroqError>;

/// Errors that can occur when talking to the Groq API
#[derive(Error, Debug)]
pub enum GroqError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Response contained no choices")]
    EmptyChoices,

    #[error("Stream error: {0}")]
    Stream(String),
}

impl From<GroqError> for ProviderError {
    fn from(err: GroqError) -> Self {
        match err {
            GroqError::Http(e) if e.is_timeout() => ProviderError::Timeout,
            GroqError::Http(e) if e.is_decode() => ProviderError::InvalidResponse(e.to_string()),
            GroqError::Http(e) => ProviderError::Connection(e.to_string()),
            GroqError::Status { status, message } => match status {
                401 | 403 => ProviderError::Authentication(message),
                429 => ProviderError::RateLimited(message),
                _ => ProviderError::Api { status, message },
            },
            GroqError::Serialization(e) => ProviderError::InvalidResponse(e.to_string()),
            GroqError::EmptyChoices => {
                ProviderError::InvalidResponse("response contained no choices".to_string())
            }
            GroqError::Stream(message) => ProviderError::Stream(message),
        }
    }
}
