//! Host-loop interaction vocabulary.
//!
//! - [`command::HostCommand`] - classification of a raw input line

pub mod command;
