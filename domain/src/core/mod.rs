//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: hosted LLM identifiers
//! - [`prompt::Prompt`]: a validated prompt to optimize
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
