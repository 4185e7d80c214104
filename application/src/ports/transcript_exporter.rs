//! Port for writing an exported transcript somewhere durable.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write transcript to {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

/// Writes transcript text as a plain UTF-8 file.
pub trait TranscriptExporter: Send + Sync {
    /// Write `transcript` to `path`, or to a generated default location when
    /// `path` is `None`. Returns the path actually written.
    fn export(&self, transcript: &str, path: Option<&Path>) -> Result<PathBuf, ExportError>;
}
