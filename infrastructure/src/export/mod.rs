//! Transcript export to plain-text files.

mod file_exporter;

pub use file_exporter::{FileTranscriptExporter, default_file_name};
