//! Type definitions for the OptimizePrompt use case.

use crate::ports::llm_gateway::GatewayError;
use polish_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during an optimization run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    /// The caller passed an empty prompt or empty feedback
    #[error("Invalid input: {0}")]
    Input(DomainError),

    /// The run configuration cannot be serviced
    #[error("Invalid configuration: {0}")]
    Config(DomainError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl OptimizeError {
    /// Check if this error came from the model gateway
    pub fn is_gateway(&self) -> bool {
        matches!(self, OptimizeError::Gateway(_))
    }

    /// Check if this error is a caller precondition violation
    pub fn is_input(&self) -> bool {
        matches!(self, OptimizeError::Input(_))
    }
}
