//! Request shaping.
//!
//! - [`config::RequestConfig`] - per-call completion parameters

pub mod config;
