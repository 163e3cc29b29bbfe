//! Progress notification port
//!
//! Defines the interface for reporting progress during an optimization run.

use polish_domain::{AgentFeedback, AgentKind};

/// Callback for progress updates during an optimization run
///
/// Called synchronously, in invocation order. Implementations live in the
/// presentation layer and only display; they never steer the run.
/// Any `Fn(AgentKind)` closure is a notifier.
pub trait OptimizationProgress: Send + Sync {
    /// Called immediately before an agent is invoked
    fn on_agent_start(&self, agent: AgentKind);

    /// Called after an agent's feedback entry has been recorded
    fn on_agent_complete(&self, _feedback: &AgentFeedback) {}
}

impl<F> OptimizationProgress for F
where
    F: Fn(AgentKind) + Send + Sync,
{
    fn on_agent_start(&self, agent: AgentKind) {
        self(agent)
    }
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl OptimizationProgress for NoProgress {
    fn on_agent_start(&self, _agent: AgentKind) {}
}
