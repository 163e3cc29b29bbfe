//! Agent call parameters.
//!
//! [`AgentParams`] groups the static parameters every agent attaches to
//! its gateway request. They come from the `[gateway]` section of the
//! config file and do not change between runs.

use polish_domain::Model;
use serde::{Deserialize, Serialize};

/// Default output-token limit per agent call
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Parameters shared by every agent request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentParams {
    /// Model identifier sent with each request
    pub model: Model,
    /// Maximum number of output tokens per request
    pub max_tokens: u32,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl AgentParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
