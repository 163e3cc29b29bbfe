//! Application-level configuration.
//!
//! - [`AgentParams`]: model and token limit attached to every agent request

pub mod agent_params;

pub use agent_params::{AgentParams, DEFAULT_MAX_TOKENS};
