//! Progress reporting for optimization runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use polish_application::ports::progress::OptimizationProgress;
use polish_domain::{AgentFeedback, AgentKind};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per in-flight agent call
///
/// In parallel mode several agents are in flight at once; completions are
/// matched to the oldest spinner of the same kind.
pub struct ProgressReporter {
    multi: MultiProgress,
    active: Mutex<Vec<(AgentKind, ProgressBar)>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            active: Mutex::new(Vec::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Clear any spinner left behind by a failed run
    pub fn finish(&self) {
        if let Ok(mut active) = self.active.lock() {
            for (_, bar) in active.drain(..) {
                bar.abandon_with_message(format!("{}", "interrupted".red()));
            }
        }
    }

    /// Number of agent calls currently shown as running
    pub fn in_flight(&self) -> usize {
        self.active.lock().map(|active| active.len()).unwrap_or(0)
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizationProgress for ProgressReporter {
    fn on_agent_start(&self, agent: AgentKind) {
        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(Self::spinner_style());
        bar.set_prefix(agent.display_name());
        bar.set_message(format!("{}...", agent.progress_description()));
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut active) = self.active.lock() {
            active.push((agent, bar));
        }
    }

    fn on_agent_complete(&self, feedback: &AgentFeedback) {
        let Ok(mut active) = self.active.lock() else {
            return;
        };
        if let Some(index) = active
            .iter()
            .position(|(kind, _)| *kind == feedback.agent_type)
        {
            let (_, bar) = active.remove(index);
            bar.finish_with_message(format!("{}", "done".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl OptimizationProgress for SimpleProgress {
    fn on_agent_start(&self, agent: AgentKind) {
        eprintln!(
            "{} {}: {}",
            "->".cyan(),
            agent.display_name().bold(),
            agent.progress_description()
        );
    }

    fn on_agent_complete(&self, feedback: &AgentFeedback) {
        eprintln!(
            "  {} {} ({} chars)",
            "v".green(),
            feedback.agent_type,
            feedback.suggestion.len().max(feedback.feedback.len())
        );
    }
}
