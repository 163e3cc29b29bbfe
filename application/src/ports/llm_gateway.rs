//! LLM Gateway port
//!
//! Defines the interface for sending one chat completion to a hosted model.

use async_trait::async_trait;
use polish_domain::{Message, Model};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A single chat completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(model: Model, messages: Vec<Message>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model,
            messages,
            temperature,
            max_tokens,
        }
    }

    /// Content of the first system message, if any
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == polish_domain::Role::System)
            .map(|m| m.content.as_str())
    }

    /// Content of the last user message, if any
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == polish_domain::Role::User)
            .map(|m| m.content.as_str())
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches a hosted model.
/// Implementations (adapters) live in the infrastructure layer; whether the
/// call is local, remote or relayed is their concern.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the request and return the generated text.
    ///
    /// An empty string means the model produced no usable content.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
