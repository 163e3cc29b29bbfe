//! Domain layer for prompt-polish
//!
//! This crate contains the value objects and aggregates of a prompt
//! optimization run. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Agent**: one of a closed set of kinds ([`AgentKind`]) that each turn
//!   a prompt into a revised prompt through a single model call
//! - **Purpose**: what the prompt will be used for ([`PromptPurpose`]),
//!   interpolated into every agent instruction
//! - **Run**: an [`OptimizationConfig`] in, a [`PromptOptimizationResult`]
//!   with its ordered [`AgentFeedback`] trail out

pub mod agent;
pub mod config;
pub mod core;
pub mod optimization;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use agent::{kind::AgentKind, purpose::PromptPurpose};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, prompt::Prompt};
pub use optimization::{
    config::OptimizationConfig, feedback::AgentFeedback, mode::OptimizationMode,
    result::PromptOptimizationResult,
};
pub use prompt::AgentPromptTemplate;
pub use session::entities::{Message, Role};
