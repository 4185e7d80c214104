//! Per-call completion parameters.

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Parameters for one completion call (Value Object)
///
/// Supplied by the caller at call time; the session never stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Model identifier.
    pub model: Model,
    /// Sampling temperature, 0.0 to 2.0.
    pub temperature: f32,
    /// Upper bound on generated tokens. Must be positive.
    pub max_output_tokens: u32,
    /// Deliver the reply as incremental fragments.
    pub stream: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            stream: false,
        }
    }
}

impl RequestConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Check the parameters before any turn is submitted.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.model.as_str().trim().is_empty() {
            return Err(DomainError::InvalidRequestConfig(
                "model must not be empty".to_string(),
            ));
        }
        if !self.temperature.is_finite()
            || !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature)
        {
            return Err(DomainError::InvalidRequestConfig(format!(
                "temperature must be between {} and {}, got {}",
                MIN_TEMPERATURE, MAX_TEMPERATURE, self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(DomainError::InvalidRequestConfig(
                "max_output_tokens must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RequestConfig::default();
        assert_eq!(config.model, Model::Llama3370bVersatile);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_output_tokens, 1024);
        assert!(!config.stream);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RequestConfig::default()
            .with_model("llama-3.1-8b-instant")
            .with_temperature(1.5)
            .with_max_output_tokens(256)
            .with_stream(true);

        assert_eq!(config.model, Model::Llama318bInstant);
        assert_eq!(config.temperature, 1.5);
        assert_eq!(config.max_output_tokens, 256);
        assert!(config.stream);
    }

    #[test]
    fn test_temperature_bounds() {
        assert!(RequestConfig::default().with_temperature(0.0).validate().is_ok());
        assert!(RequestConfig::default().with_temperature(2.0).validate().is_ok());
        assert!(RequestConfig::default().with_temperature(2.01).validate().is_err());
        assert!(RequestConfig::default().with_temperature(-0.1).validate().is_err());
        assert!(RequestConfig::default().with_temperature(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        let err = RequestConfig::default()
            .with_max_output_tokens(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequestConfig(_)));
    }

    #[test]
    fn test_empty_model_rejected() {
        assert!(RequestConfig::default().with_model("  ").validate().is_err());
    }
}
