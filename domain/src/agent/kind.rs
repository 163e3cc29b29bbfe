//! Agent kind value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The closed set of agents that can take part in an optimization run
///
/// Each kind differs only in the instruction text it sends and the
/// sampling temperature it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Rewrites the prompt for clarity and structure
    Rewriter,
    /// Critiques the prompt for ambiguity and missing constraints
    Critic,
    /// Merges the prompt and feedback into one clean revision
    Finalizer,
}

impl AgentKind {
    /// All agent kinds in pipeline order
    pub const ALL: [AgentKind; 3] = [AgentKind::Rewriter, AgentKind::Critic, AgentKind::Finalizer];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Rewriter => "rewriter",
            AgentKind::Critic => "critic",
            AgentKind::Finalizer => "finalizer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgentKind::Rewriter => "Prompt Rewriter",
            AgentKind::Critic => "Prompt Critic",
            AgentKind::Finalizer => "Prompt Finalizer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::Rewriter => "Improves prompt clarity and structure",
            AgentKind::Critic => "Analyzes and identifies improvements",
            AgentKind::Finalizer => "Creates final optimized version",
        }
    }

    /// Short status line shown while the agent is running
    pub fn progress_description(&self) -> &'static str {
        match self {
            AgentKind::Rewriter => "Improving clarity and structure",
            AgentKind::Critic => "Analyzing for potential improvements",
            AgentKind::Finalizer => "Creating optimized final version",
        }
    }

    /// Default sampling temperature.
    ///
    /// The finalizer produces the delivered artifact and samples lower.
    pub fn default_temperature(&self) -> f32 {
        match self {
            AgentKind::Rewriter | AgentKind::Critic => 0.7,
            AgentKind::Finalizer => 0.5,
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rewriter" => Ok(AgentKind::Rewriter),
            "critic" => Ok(AgentKind::Critic),
            "finalizer" => Ok(AgentKind::Finalizer),
            other => Err(DomainError::UnknownAgent(other.to_string())),
        }
    }
}
