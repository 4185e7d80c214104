//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while waiting for a non-streamed reply
    pub show_progress: bool,
    /// Path to history file (`~/` is expanded)
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Resolved history location. Falls back to
    /// `<data dir>/groq-chat/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join("groq-chat").join("history.txt")),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path() {
        let config = FileReplConfig {
            history_file: Some("/tmp/groq-history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/groq-history.txt"))
        );
    }

    #[test]
    fn test_history_path_expands_home() {
        let config = FileReplConfig {
            history_file: Some("~/.groq_history".to_string()),
            ..Default::default()
        };
        let path = config.history_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join(".groq_history"));
        }
    }
}
