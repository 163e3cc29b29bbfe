//! Model gateway configuration from TOML (`[gateway]` section)

use polish_domain::Model;
use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";

/// Environment variable consulted when `api_key` is not set
pub const DEFAULT_API_KEY_ENV: &str = "NVIDIA_API_KEY";

/// Raw gateway configuration from TOML
///
/// # Example
///
/// ```toml
/// [gateway]
/// base_url = "https://integrate.api.nvidia.com/v1"
/// model = "meta/llama-3.3-70b-instruct"
/// api_key_env = "NVIDIA_API_KEY"
/// max_tokens = 2048
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Base URL; `/chat/completions` is appended
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// API key. Prefer `api_key_env` over storing keys in files.
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Completion token limit per request
    pub max_tokens: u32,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: Model::default().to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            max_tokens: 2048,
            timeout_seconds: 60,
        }
    }
}

impl FileGatewayConfig {
    pub fn parse_model(&self) -> Model {
        let Ok(model) = self.model.trim().parse::<Model>();
        model
    }

    /// The configured key, falling back to the `api_key_env` variable.
    ///
    /// Blank values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
