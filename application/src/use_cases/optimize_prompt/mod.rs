//! Optimize Prompt use case
//!
//! Runs a prompt through the configured agents with one of three
//! strategies (sequential, parallel, critique-revise) and collects the
//! timestamped feedback trail.
//!
//! Module structure:
//! - `types`: Error type
//! - `agent`: The [`PromptAgent`] wrapped around one gateway call
//! - `strategies`: Sequential, parallel and critique-revise algorithms
//! - `regenerate`: Feedback-driven finalizer re-run

mod agent;
mod regenerate;
mod strategies;
mod types;

pub use agent::PromptAgent;
pub use types::OptimizeError;

use crate::config::AgentParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, OptimizationProgress};
use polish_domain::{
    AgentFeedback, AgentKind, OptimizationConfig, OptimizationMode, Prompt,
    PromptOptimizationResult,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for running a prompt optimization
///
/// Owns one [`PromptAgent`] per registered [`AgentKind`]. The registry is
/// fixed at construction and only read afterwards.
pub struct OptimizePromptUseCase<G: LlmGateway + 'static> {
    agents: BTreeMap<AgentKind, PromptAgent<G>>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> OptimizePromptUseCase<G> {
    /// Register one agent of every kind with default parameters
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_params(gateway, AgentParams::default())
    }

    /// Register one agent of every kind
    pub fn with_params(gateway: Arc<G>, params: AgentParams) -> Self {
        Self::with_agents(gateway, params, &AgentKind::ALL)
    }

    /// Register only the given agent kinds
    pub fn with_agents(gateway: Arc<G>, params: AgentParams, kinds: &[AgentKind]) -> Self {
        let agents = kinds
            .iter()
            .map(|kind| {
                (
                    *kind,
                    PromptAgent::new(*kind, Arc::clone(&gateway), params.clone()),
                )
            })
            .collect();

        Self {
            agents,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Record every agent request/response to the given logger
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Look up a registered agent
    pub fn agent(&self, kind: AgentKind) -> Option<&PromptAgent<G>> {
        self.agents.get(&kind)
    }

    /// Registered agent kinds, in pipeline order
    pub fn registered_agents(&self) -> impl Iterator<Item = AgentKind> + '_ {
        self.agents.keys().copied()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        prompt: &str,
        config: &OptimizationConfig,
    ) -> Result<PromptOptimizationResult, OptimizeError> {
        self.execute_with_progress(prompt, config, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Any agent failure aborts the run and is returned as-is; feedback
    /// gathered so far is dropped with it.
    pub async fn execute_with_progress(
        &self,
        prompt: &str,
        config: &OptimizationConfig,
        progress: &dyn OptimizationProgress,
    ) -> Result<PromptOptimizationResult, OptimizeError> {
        let prompt = Prompt::try_new(prompt).map_err(OptimizeError::Input)?;
        config.validate().map_err(OptimizeError::Config)?;

        info!(
            "Starting {} optimization with {} agent(s), {} iteration(s), purpose {}",
            config.mode,
            config.selected_agents.len(),
            config.max_iterations,
            config.purpose
        );

        let mut feedback = Vec::new();
        let optimized = match config.mode {
            OptimizationMode::Sequential => {
                self.run_sequential(prompt.content(), config, &mut feedback, progress)
                    .await?
            }
            OptimizationMode::Parallel => {
                self.run_parallel(prompt.content(), config, &mut feedback, progress)
                    .await?
            }
            OptimizationMode::Critique => {
                self.run_critique(prompt.content(), config, &mut feedback, progress)
                    .await?
            }
        };

        info!(
            "Optimization finished after {} agent call(s)",
            feedback.len()
        );
        self.conversation_logger.log(ConversationEvent::new(
            "optimization_complete",
            serde_json::json!({
                "mode": config.mode.as_str(),
                "purpose": config.purpose.as_str(),
                "agent_calls": feedback.len(),
                "optimized_prompt": optimized,
            }),
        ));

        Ok(PromptOptimizationResult::new(
            prompt.into_content(),
            optimized,
            feedback,
        ))
    }

    /// Registered agent for `kind`, warning when it is missing
    fn lookup(&self, kind: AgentKind) -> Option<&PromptAgent<G>> {
        let agent = self.agents.get(&kind);
        if agent.is_none() {
            warn!("Agent {} is not registered, skipping", kind);
        }
        agent
    }

    /// Invoke one agent: progress first, then the gateway call.
    async fn invoke(
        &self,
        agent: &PromptAgent<G>,
        input: &str,
        config: &OptimizationConfig,
        progress: &dyn OptimizationProgress,
    ) -> Result<String, OptimizeError> {
        let kind = agent.kind();
        progress.on_agent_start(kind);

        self.conversation_logger.log(ConversationEvent::new(
            "agent_request",
            serde_json::json!({
                "agent": kind.as_str(),
                "purpose": config.purpose.as_str(),
                "input": input,
            }),
        ));

        let output = agent
            .process_with_temperature(input, config.purpose, config.temperature)
            .await
            .inspect_err(|e| warn!("Agent {} failed: {}", kind, e))?;

        self.conversation_logger.log(ConversationEvent::new(
            "agent_response",
            serde_json::json!({
                "agent": kind.as_str(),
                "bytes": output.len(),
                "output": output,
            }),
        ));

        Ok(output)
    }
}

/// Append one entry to the trail and notify
fn record(
    feedback: &mut Vec<AgentFeedback>,
    entry: AgentFeedback,
    progress: &dyn OptimizationProgress,
) {
    progress.on_agent_complete(&entry);
    feedback.push(entry);
}

#[cfg(test)]
mod tests;
