//! [`TranscriptExporter`] that writes UTF-8 text files.

use chrono::{DateTime, Local};
use groq_chat_application::{ExportError, TranscriptExporter};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `chat-transcript-<YYYYmmdd-HHMMSS>.txt` for the given moment.
pub fn default_file_name(at: DateTime<Local>) -> String {
    format!("chat-transcript-{}.txt", at.format("%Y%m%d-%H%M%S"))
}

/// Writes transcripts under `directory` when no explicit path is given.
#[derive(Debug, Clone)]
pub struct FileTranscriptExporter {
    directory: PathBuf,
}

impl FileTranscriptExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Default files go to the current directory.
    pub fn in_current_dir() -> Self {
        Self::new(".")
    }

    fn target(&self, path: Option<&Path>) -> PathBuf {
        match path {
            Some(path) => path.to_path_buf(),
            None => self.directory.join(default_file_name(Local::now())),
        }
    }
}

impl TranscriptExporter for FileTranscriptExporter {
    fn export(&self, transcript: &str, path: Option<&Path>) -> Result<PathBuf, ExportError> {
        let target = self.target(path);
        let write_error = |e: std::io::Error| ExportError::Write {
            path: target.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let mut content = transcript.to_string();
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        std::fs::write(&target, content).map_err(write_error)?;

        debug!("Wrote {} bytes to {}", transcript.len(), target.display());
        Ok(target)
    }
}
