//! Optimization result aggregate

use crate::optimization::feedback::AgentFeedback;
use serde::{Deserialize, Serialize};

/// Output of one optimization run.
///
/// Serialized with camelCase keys; this is also the shape persisted for
/// draft recovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOptimizationResult {
    pub original_prompt: String,
    pub optimized_prompt: String,
    #[serde(default)]
    pub agent_feedback: Vec<AgentFeedback>,
}

impl PromptOptimizationResult {
    pub fn new(
        original_prompt: impl Into<String>,
        optimized_prompt: impl Into<String>,
        agent_feedback: Vec<AgentFeedback>,
    ) -> Self {
        Self {
            original_prompt: original_prompt.into(),
            optimized_prompt: optimized_prompt.into(),
            agent_feedback,
        }
    }

    /// Result of a run that invoked no agent
    pub fn unchanged(prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        Self::new(prompt.clone(), prompt, Vec::new())
    }

    /// Merge a regenerated prompt into a copy of this result.
    ///
    /// The copy keeps the original prompt and the existing trail, takes the
    /// new text as its optimized prompt and gains one trailing finalizer
    /// entry describing the regeneration.
    pub fn with_regeneration(&self, user_feedback: &str, regenerated: impl Into<String>) -> Self {
        let regenerated = regenerated.into();
        let mut agent_feedback = self.agent_feedback.clone();
        agent_feedback.push(AgentFeedback::regeneration(
            user_feedback,
            regenerated.clone(),
        ));
        Self {
            original_prompt: self.original_prompt.clone(),
            optimized_prompt: regenerated,
            agent_feedback,
        }
    }

    /// Whether any agent changed the prompt
    pub fn is_changed(&self) -> bool {
        self.original_prompt != self.optimized_prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::kind::AgentKind;

    #[test]
    fn test_unchanged() {
        let result = PromptOptimizationResult::unchanged("hi");
        assert_eq!(result.optimized_prompt, "hi");
        assert!(result.agent_feedback.is_empty());
        assert!(!result.is_changed());
    }

    #[test]
    fn test_with_regeneration_copies() {
        let prior = PromptOptimizationResult::new(
            "orig",
            "X",
            vec![AgentFeedback::output(AgentKind::Rewriter, "X")],
        );

        let merged = prior.with_regeneration("shorter", "Y");

        assert_eq!(merged.optimized_prompt, "Y");
        assert_eq!(merged.original_prompt, "orig");
        assert_eq!(merged.agent_feedback.len(), 2);
        let last = merged.agent_feedback.last().unwrap();
        assert_eq!(last.agent_type, AgentKind::Finalizer);
        assert!(last.feedback.contains("shorter"));
        assert_eq!(last.suggestion, "Y");

        // Prior is untouched
        assert_eq!(prior.optimized_prompt, "X");
        assert_eq!(prior.agent_feedback.len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let result = PromptOptimizationResult::new(
            "a",
            "b",
            vec![AgentFeedback::output(AgentKind::Finalizer, "b").with_timestamp(1)],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["originalPrompt"], "a");
        assert_eq!(json["optimizedPrompt"], "b");
        assert_eq!(json["agentFeedback"][0]["agentType"], "finalizer");

        let back: PromptOptimizationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
