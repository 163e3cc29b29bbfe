//! The prompt/result state a front end keeps between runs.
//!
//! A [`ResultSession`] holds the prompt being worked on, its purpose, the
//! last successful result and any pending regeneration feedback. Failed
//! runs never touch that state. Results persist as JSON in the same shape
//! `--output json` prints, so a saved draft can be regenerated later.

use polish_application::{
    LlmGateway, OptimizationProgress, OptimizeError, OptimizePromptUseCase,
};
use polish_domain::{OptimizationConfig, PromptOptimizationResult, PromptPurpose};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No optimized prompt yet; run an optimization first")]
    NoResult,

    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid result file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub struct ResultSession<G: LlmGateway + 'static> {
    use_case: Arc<OptimizePromptUseCase<G>>,
    prompt: String,
    purpose: PromptPurpose,
    result: Option<PromptOptimizationResult>,
    pending_feedback: String,
}

impl<G: LlmGateway + 'static> ResultSession<G> {
    pub fn new(use_case: Arc<OptimizePromptUseCase<G>>) -> Self {
        Self {
            use_case,
            prompt: String::new(),
            purpose: PromptPurpose::default(),
            result: None,
            pending_feedback: String::new(),
        }
    }

    /// Resume from a previously saved result
    pub fn restore(&mut self, result: PromptOptimizationResult) {
        self.prompt = result.original_prompt.clone();
        self.result = Some(result);
        self.pending_feedback.clear();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn purpose(&self) -> PromptPurpose {
        self.purpose
    }

    pub fn set_purpose(&mut self, purpose: PromptPurpose) {
        self.purpose = purpose;
    }

    pub fn result(&self) -> Option<&PromptOptimizationResult> {
        self.result.as_ref()
    }

    pub fn pending_feedback(&self) -> &str {
        &self.pending_feedback
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.pending_feedback = feedback.into();
    }

    /// Optimize the current prompt with `config` (its purpose included).
    ///
    /// The previous result survives a failed run.
    pub async fn optimize(
        &mut self,
        config: &OptimizationConfig,
        progress: &dyn OptimizationProgress,
    ) -> Result<&PromptOptimizationResult, SessionError> {
        let result = self
            .use_case
            .execute_with_progress(&self.prompt, config, progress)
            .await?;

        self.purpose = config.purpose;
        Ok(self.result.insert(result))
    }

    /// Regenerate the current result from the pending feedback and merge
    /// the new text into it.
    pub async fn regenerate(
        &mut self,
        progress: &dyn OptimizationProgress,
    ) -> Result<&PromptOptimizationResult, SessionError> {
        let prior = self.result.as_ref().ok_or(SessionError::NoResult)?;

        let regenerated = self
            .use_case
            .regenerate(prior, &self.pending_feedback, self.purpose, progress)
            .await?;

        let merged = prior.with_regeneration(&self.pending_feedback, regenerated.optimized_prompt);
        info!(
            "Merged regeneration; trail now has {} entries",
            merged.agent_feedback.len()
        );
        self.pending_feedback.clear();
        Ok(self.result.insert(merged))
    }

    /// Write the current result as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let result = self.result.as_ref().ok_or(SessionError::NoResult)?;
        let json = serde_json::to_string_pretty(result).map_err(|source| SessionError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json + "\n").map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved result to {}", path.display());
        Ok(())
    }

    /// Read a result saved by [`save`](Self::save) or `--output json`
    pub fn load(path: &Path) -> Result<PromptOptimizationResult, SessionError> {
        let json = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SessionError::Format {
            path: path.to_path_buf(),
            source,
        })
    }
}
