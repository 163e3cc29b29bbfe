//! Per-invocation agent feedback record

use crate::agent::kind::AgentKind;
use serde::{Deserialize, Serialize};

/// One record per agent invocation.
///
/// The ordered sequence of these is the audit trail of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFeedback {
    pub agent_type: AgentKind,
    pub feedback: String,
    pub suggestion: String,
    /// Unix epoch milliseconds (UTC)
    pub timestamp: i64,
}

impl AgentFeedback {
    /// Creates a feedback entry stamped with the current time.
    pub fn new(
        agent_type: AgentKind,
        feedback: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            agent_type,
            feedback: feedback.into(),
            suggestion: suggestion.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Entry whose output is both the feedback and the suggestion
    pub fn output(agent_type: AgentKind, output: impl Into<String>) -> Self {
        let output = output.into();
        Self::new(agent_type, output.clone(), output)
    }

    /// Feedback-only entry (critic round)
    pub fn critique(critique: impl Into<String>) -> Self {
        Self::new(AgentKind::Critic, critique, String::new())
    }

    /// Suggestion-only entry (rewriter round)
    pub fn revision(suggestion: impl Into<String>) -> Self {
        Self::new(AgentKind::Rewriter, String::new(), suggestion)
    }

    /// Synthetic finalizer entry recorded after a feedback-driven regeneration
    pub fn regeneration(user_feedback: &str, suggestion: impl Into<String>) -> Self {
        Self::new(
            AgentKind::Finalizer,
            format!("Regenerated based on user feedback: {}", user_feedback),
            suggestion,
        )
    }

    #[cfg(test)]
    pub(crate) fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }
}
