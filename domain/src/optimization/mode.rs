//! Optimization mode value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Which orchestration algorithm runs the selected agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationMode {
    /// Agents run one after another, each consuming the previous output
    #[default]
    Sequential,
    /// Agents run concurrently on the original prompt, then the finalizer merges
    Parallel,
    /// Critic and rewriter alternate, then the finalizer closes
    Critique,
}

impl OptimizationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMode::Sequential => "sequential",
            OptimizationMode::Parallel => "parallel",
            OptimizationMode::Critique => "critique",
        }
    }
}

impl std::fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OptimizationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(OptimizationMode::Sequential),
            "parallel" => Ok(OptimizationMode::Parallel),
            "critique" => Ok(OptimizationMode::Critique),
            other => Err(DomainError::UnknownMode(other.to_string())),
        }
    }
}
