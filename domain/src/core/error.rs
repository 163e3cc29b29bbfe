//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Feedback cannot be empty")]
    EmptyFeedback,

    #[error("max_iterations must be at least 1")]
    InvalidIterations,

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Unknown prompt purpose: {0}")]
    UnknownPurpose(String),

    #[error("Unknown optimization mode: {0}")]
    UnknownMode(String),
}

impl DomainError {
    /// Check if this error is a caller precondition violation (empty input)
    pub fn is_input_error(&self) -> bool {
        matches!(self, DomainError::EmptyPrompt | DomainError::EmptyFeedback)
    }
}
