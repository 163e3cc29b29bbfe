//! Feedback-driven regeneration for the OptimizePrompt use case.

use super::OptimizePromptUseCase;
use super::types::OptimizeError;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::OptimizationProgress;
use polish_domain::{
    AgentPromptTemplate, DomainError, OptimizationConfig, PromptOptimizationResult, PromptPurpose,
};
use tracing::info;

impl<G: LlmGateway + 'static> OptimizePromptUseCase<G> {
    /// Re-run the finalizer over a prior result and free-text user feedback.
    ///
    /// Returns the raw single-agent run. Merging the new text into the prior
    /// result is left to the caller (see
    /// [`PromptOptimizationResult::with_regeneration`]).
    pub async fn regenerate(
        &self,
        prior: &PromptOptimizationResult,
        user_feedback: &str,
        purpose: PromptPurpose,
        progress: &dyn OptimizationProgress,
    ) -> Result<PromptOptimizationResult, OptimizeError> {
        if user_feedback.trim().is_empty() {
            return Err(OptimizeError::Input(DomainError::EmptyFeedback));
        }

        info!("Regenerating optimized prompt from user feedback");

        let input = AgentPromptTemplate::regeneration(
            &prior.original_prompt,
            &prior.optimized_prompt,
            user_feedback,
        );
        self.execute_with_progress(&input, &OptimizationConfig::regeneration(purpose), progress)
            .await
    }
}
