//! Orchestration strategies for the OptimizePrompt use case.

use super::types::OptimizeError;
use super::{OptimizePromptUseCase, record};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::OptimizationProgress;
use futures::future::try_join_all;
use polish_domain::{AgentFeedback, AgentKind, AgentPromptTemplate, OptimizationConfig};
use tracing::{debug, info, warn};

impl<G: LlmGateway + 'static> OptimizePromptUseCase<G> {
    /// Every selected agent in declared order, `max_iterations` times,
    /// each consuming the previous output.
    pub(super) async fn run_sequential(
        &self,
        prompt: &str,
        config: &OptimizationConfig,
        feedback: &mut Vec<AgentFeedback>,
        progress: &dyn OptimizationProgress,
    ) -> Result<String, OptimizeError> {
        let mut current = prompt.to_string();

        for pass in 1..=config.max_iterations {
            debug!("Sequential pass {}/{}", pass, config.max_iterations);

            for kind in &config.selected_agents {
                let Some(agent) = self.lookup(*kind) else {
                    continue;
                };

                let output = self.invoke(agent, &current, config, progress).await?;
                record(feedback, AgentFeedback::output(*kind, output.clone()), progress);
                current = output;
            }
        }

        Ok(current)
    }

    /// Every selected agent concurrently on the original prompt, then a
    /// finalizer pass over all variations.
    pub(super) async fn run_parallel(
        &self,
        prompt: &str,
        config: &OptimizationConfig,
        feedback: &mut Vec<AgentFeedback>,
        progress: &dyn OptimizationProgress,
    ) -> Result<String, OptimizeError> {
        info!(
            "Issuing {} concurrent agent call(s)",
            config.selected_agents.len()
        );

        // Polled in declared order, so progress fires in that order too.
        // An unregistered agent keeps its slot with the original prompt.
        let branches = config.selected_agents.iter().map(|kind| async move {
            let Some(agent) = self.lookup(*kind) else {
                return Ok::<_, OptimizeError>((prompt.to_string(), None));
            };
            let variation = self.invoke(agent, prompt, config, progress).await?;
            // Stamped when this branch resolves, not when the join does.
            let entry = AgentFeedback::output(agent.kind(), variation.clone());
            Ok::<_, OptimizeError>((variation, Some(entry)))
        });
        let settled = try_join_all(branches).await?;

        let mut variations = Vec::with_capacity(settled.len());
        for (variation, entry) in settled {
            if let Some(entry) = entry {
                record(feedback, entry, progress);
            }
            variations.push(variation);
        }

        let Some(finalizer) = self.agents.get(&AgentKind::Finalizer) else {
            warn!("No finalizer registered, returning first variation");
            return Ok(variations
                .into_iter()
                .next()
                .unwrap_or_else(|| prompt.to_string()));
        };

        let combined = AgentPromptTemplate::parallel_combine(prompt, &variations);
        let output = self.invoke(finalizer, &combined, config, progress).await?;
        record(
            feedback,
            AgentFeedback::output(AgentKind::Finalizer, output.clone()),
            progress,
        );

        Ok(output)
    }

    /// Critic and rewriter alternate for `max_iterations` rounds, then one
    /// closing finalizer pass.
    ///
    /// Without both a critic and a rewriter the original prompt comes back
    /// unchanged and nothing is recorded.
    pub(super) async fn run_critique(
        &self,
        prompt: &str,
        config: &OptimizationConfig,
        feedback: &mut Vec<AgentFeedback>,
        progress: &dyn OptimizationProgress,
    ) -> Result<String, OptimizeError> {
        let (Some(critic), Some(rewriter)) = (
            self.agents.get(&AgentKind::Critic),
            self.agents.get(&AgentKind::Rewriter),
        ) else {
            warn!("Critique mode needs both a critic and a rewriter, returning prompt unchanged");
            return Ok(prompt.to_string());
        };

        let mut current = prompt.to_string();

        for round in 1..=config.max_iterations {
            debug!("Critique round {}/{}", round, config.max_iterations);

            let critique = self.invoke(critic, &current, config, progress).await?;
            record(feedback, AgentFeedback::critique(critique.clone()), progress);

            let revision_input = AgentPromptTemplate::critique_revision(&current, &critique);
            let improved = self
                .invoke(rewriter, &revision_input, config, progress)
                .await?;
            record(feedback, AgentFeedback::revision(improved.clone()), progress);

            current = improved;
        }

        if let Some(finalizer) = self.agents.get(&AgentKind::Finalizer) {
            current = self.invoke(finalizer, &current, config, progress).await?;
            record(
                feedback,
                AgentFeedback::output(AgentKind::Finalizer, current.clone()),
                progress,
            );
        }

        Ok(current)
    }
}
