//! Optimization run defaults from TOML (`[optimization]` section)

use super::ConfigValidationError;
use polish_domain::{AgentKind, OptimizationConfig, OptimizationMode, PromptPurpose};
use serde::{Deserialize, Serialize};

/// Raw optimization configuration from TOML
///
/// Names are kept as strings so that typos are reported with the offending
/// field instead of a generic deserialization error.
///
/// # Example
///
/// ```toml
/// [optimization]
/// mode = "sequential"            # sequential | parallel | critique
/// agents = ["rewriter", "critic", "finalizer"]
/// max_iterations = 1
/// purpose = "article_writing"
/// # temperature = 0.6            # overrides the per-agent defaults
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOptimizationConfig {
    pub mode: String,
    /// Agents in pipeline order
    pub agents: Vec<String>,
    pub max_iterations: usize,
    pub temperature: Option<f32>,
    pub purpose: String,
}

impl Default for FileOptimizationConfig {
    fn default() -> Self {
        let defaults = OptimizationConfig::default();
        Self {
            mode: defaults.mode.as_str().to_string(),
            agents: defaults
                .selected_agents
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            max_iterations: defaults.max_iterations,
            temperature: defaults.temperature,
            purpose: defaults.purpose.as_str().to_string(),
        }
    }
}

impl FileOptimizationConfig {
    pub fn parse_mode(&self) -> Result<OptimizationMode, ConfigValidationError> {
        self.mode
            .parse::<OptimizationMode>()
            .map_err(|source| ConfigValidationError::InvalidValue {
                field: "optimization.mode",
                source,
            })
    }

    pub fn parse_agents(&self) -> Result<Vec<AgentKind>, ConfigValidationError> {
        self.agents
            .iter()
            .map(|name| {
                name.parse::<AgentKind>()
                    .map_err(|source| ConfigValidationError::InvalidValue {
                        field: "optimization.agents",
                        source,
                    })
            })
            .collect()
    }

    pub fn parse_purpose(&self) -> Result<PromptPurpose, ConfigValidationError> {
        self.purpose
            .parse::<PromptPurpose>()
            .map_err(|source| ConfigValidationError::InvalidValue {
                field: "optimization.purpose",
                source,
            })
    }

    /// Convert into the domain run configuration
    pub fn to_optimization_config(&self) -> Result<OptimizationConfig, ConfigValidationError> {
        if self.max_iterations == 0 {
            return Err(ConfigValidationError::InvalidIterations);
        }

        let mut config = OptimizationConfig::sequential(self.parse_agents()?)
            .with_mode(self.parse_mode()?)
            .with_max_iterations(self.max_iterations)
            .with_purpose(self.parse_purpose()?);
        if let Some(temperature) = self.temperature {
            config = config.with_temperature(temperature);
        }
        Ok(config)
    }
}
