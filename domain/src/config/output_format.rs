//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for optimization results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Optimized prompt followed by the full agent feedback trail
    Full,
    /// Only the optimized prompt (default)
    #[default]
    Final,
    /// JSON output in the persisted result shape
    Json,
}
