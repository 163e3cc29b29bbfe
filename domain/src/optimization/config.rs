//! Per-run optimization configuration

use crate::agent::kind::AgentKind;
use crate::agent::purpose::PromptPurpose;
use crate::core::error::DomainError;
use crate::optimization::mode::OptimizationMode;
use serde::{Deserialize, Serialize};

/// Configuration for a single optimization run.
///
/// Built fresh for every call; the orchestrator never stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
    pub mode: OptimizationMode,
    /// Agents to invoke, in order
    pub selected_agents: Vec<AgentKind>,
    /// Number of passes (sequential) or rounds (critique)
    pub max_iterations: usize,
    /// Sampling temperature forwarded to the gateway for every agent.
    /// `None` lets each agent use its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub purpose: PromptPurpose,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            mode: OptimizationMode::Sequential,
            selected_agents: AgentKind::ALL.to_vec(),
            max_iterations: 1,
            temperature: None,
            purpose: PromptPurpose::default(),
        }
    }
}

impl OptimizationConfig {
    /// Sequential pipeline over the given agents
    pub fn sequential(agents: Vec<AgentKind>) -> Self {
        Self {
            selected_agents: agents,
            ..Default::default()
        }
    }

    /// Single finalizer pass used for feedback-driven regeneration
    pub fn regeneration(purpose: PromptPurpose) -> Self {
        Self::sequential(vec![AgentKind::Finalizer]).with_purpose(purpose)
    }

    pub fn with_mode(mut self, mode: OptimizationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_agents(mut self, agents: Vec<AgentKind>) -> Self {
        self.selected_agents = agents;
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_purpose(mut self, purpose: PromptPurpose) -> Self {
        self.purpose = purpose;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_iterations == 0 {
            return Err(DomainError::InvalidIterations);
        }
        Ok(())
    }
}
