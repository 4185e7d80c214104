//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These are caller-misuse conditions. Provider failures are never
/// represented here; they become assistant-turn content instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid request configuration: {0}")]
    InvalidRequestConfig(String),
}

impl DomainError {
    /// Check if this error is the recoverable empty-input condition
    pub fn is_empty_input(&self) -> bool {
        matches!(self, DomainError::EmptyInput)
    }
}
