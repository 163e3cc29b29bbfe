//! Configuration file loading for prompt-polish
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POLISH_*` environment variables (`POLISH_GATEWAY__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./polish.toml` or `./.polish.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/prompt-polish/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileConfig, FileGatewayConfig,
    FileLoggingConfig, FileOptimizationConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
