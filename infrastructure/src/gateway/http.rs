//! HTTP chat-completions gateway

use super::protocol::{ChatCompletionBody, parse_completion};
use crate::config::FileGatewayConfig;
use async_trait::async_trait;
use polish_application::{CompletionRequest, GatewayError, LlmGateway};
use std::time::Duration;
use tracing::{debug, info, warn};

/// LLM Gateway implementation for OpenAI-compatible endpoints
///
/// One shared [`reqwest::Client`] serves every agent call; each call is a
/// single request with no retry.
pub struct HttpLlmGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl HttpLlmGateway {
    /// Create a gateway for `base_url` (e.g. `https://integrate.api.nvidia.com/v1`)
    ///
    /// A missing key is not an error here; every call reports it instead.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            api_key_env: crate::config::DEFAULT_API_KEY_ENV.to_string(),
        })
    }

    /// Create a gateway from the `[gateway]` config section
    pub fn from_config(config: &FileGatewayConfig) -> Result<Self, GatewayError> {
        let mut gateway = Self::new(
            &config.base_url,
            config.resolve_api_key(),
            Duration::from_secs(config.timeout_seconds),
        )?;
        gateway.api_key_env = config.api_key_env.clone();

        info!(
            "HttpLlmGateway initialized for {} (API key {})",
            gateway.endpoint,
            if gateway.api_key.is_some() { "set" } else { "missing" }
        );
        Ok(gateway)
    }

    /// Full chat-completions URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::Connection(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::Configuration(format!(
                "API key not found. Set gateway.api_key or the {} environment variable.",
                self.api_key_env
            ))
        })?;

        debug!(
            "POST {} (model {}, {} message(s))",
            self.endpoint,
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&ChatCompletionBody::from(request))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            warn!("Chat completion failed with status {}", status.as_u16());
            return Err(GatewayError::RequestFailed(format!(
                "API responded with status {}: {}",
                status.as_u16(),
                body
            )));
        }

        parse_completion(&body)
    }
}
