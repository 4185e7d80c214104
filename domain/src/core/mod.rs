//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - models served by the completion provider
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
