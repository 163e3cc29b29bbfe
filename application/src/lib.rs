//! Application layer for prompt-polish
//!
//! This crate contains the optimization use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AgentParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{NoProgress, OptimizationProgress},
};
pub use use_cases::optimize_prompt::{OptimizeError, OptimizePromptUseCase, PromptAgent};
