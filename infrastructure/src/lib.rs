//! Infrastructure layer for prompt-polish
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGatewayConfig, FileLoggingConfig,
    FileOptimizationConfig, FileOutputConfig, FileOutputFormat,
};
pub use gateway::HttpLlmGateway;
pub use logging::JsonlConversationLogger;
