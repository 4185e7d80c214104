//! Output configuration from TOML (`[output]` section)

use groq_chat_domain::RoleLabels;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Label for user turns in the console and in exported transcripts
    pub user_label: String,
    /// Label for assistant turns in the console and in exported transcripts
    pub assistant_label: String,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        let labels = RoleLabels::default();
        Self {
            color: true,
            user_label: labels.user,
            assistant_label: labels.assistant,
        }
    }
}

impl FileOutputConfig {
    pub fn role_labels(&self) -> RoleLabels {
        RoleLabels::new(self.user_label.clone(), self.assistant_label.clone())
    }
}
