//! Log destinations from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// dir = "~/.local/state/prompt-polish/logs"    # daily-rolling diagnostic log
/// conversation_log = "polish-transcript.jsonl"  # agent request/response transcript
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the rolling diagnostic log file
    pub dir: Option<PathBuf>,
    /// JSONL file receiving every agent request and response
    pub conversation_log: Option<PathBuf>,
}
