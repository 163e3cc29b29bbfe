//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gateway;
mod logging;
mod optimization;
mod output;

pub use gateway::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileGatewayConfig};
pub use logging::FileLoggingConfig;
pub use optimization::FileOptimizationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use polish_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("gateway.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gateway.max_tokens cannot be 0")]
    InvalidMaxTokens,

    #[error("gateway.model cannot be empty")]
    EmptyModelName,

    #[error("optimization.max_iterations must be at least 1")]
    InvalidIterations,

    #[error("{field}: {source}")]
    InvalidValue {
        field: &'static str,
        source: DomainError,
    },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model endpoint settings
    pub gateway: FileGatewayConfig,
    /// Defaults for optimization runs
    pub optimization: FileOptimizationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gateway.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.gateway.max_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }
        if self.gateway.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        self.optimization.to_optimization_config()?;
        Ok(())
    }
}
