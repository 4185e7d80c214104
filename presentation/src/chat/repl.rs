//! Readline input for the interactive chat

use crate::config::ReplConfig;
use groq_chat_application::{InputError, InputEvent, InputSource};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::{debug, warn};

/// [`InputSource`] backed by rustyline, with persistent history.
///
/// History is loaded on creation and saved when the value is dropped.
pub struct ReadlineInput {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl ReadlineInput {
    pub fn new(config: &ReplConfig) -> Result<Self, InputError> {
        let mut editor = DefaultEditor::new().map_err(|e| InputError::Io(e.to_string()))?;

        if let Some(path) = &config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            // Missing on first run
            if let Err(e) = editor.load_history(path) {
                debug!("No history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_path: config.history_file.clone(),
        })
    }
}

impl InputSource for ReadlineInput {
    fn read_input(&mut self, prompt: &str) -> Result<InputEvent, InputError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(InputEvent::Line(line)),
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(InputEvent::Interrupted)
            }
            Err(ReadlineError::Eof) => Ok(InputEvent::EndOfInput),
            Err(err) => Err(InputError::Io(err.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

impl Drop for ReadlineInput {
    fn drop(&mut self) {
        if let Some(path) = &self.history_path
            && let Err(e) = self.editor.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }
    }
}
