//! Presentation-level configuration
//!
//! Configuration for console output and REPL behavior, already resolved
//! from files and flags by the binary.

use groq_chat_domain::RoleLabels;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while waiting for a whole reply
    pub show_progress: bool,
    /// Display labels for user and assistant turns
    pub labels: RoleLabels,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
            labels: RoleLabels::default(),
        }
    }
}

impl OutputConfig {
    /// Plain text, no spinner. Used for tests and piped output.
    pub fn plain() -> Self {
        Self {
            color: false,
            show_progress: false,
            ..Self::default()
        }
    }

    pub fn with_labels(mut self, labels: RoleLabels) -> Self {
        self.labels = labels;
        self
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Where readline history is loaded from and saved to
    pub history_file: Option<PathBuf>,
}
