//! A single prompt-transforming agent.
//!
//! Every [`PromptAgent`] sends a two-message conversation (purpose-specific
//! system instruction + the input verbatim) through the [`LlmGateway`]
//! port. Kinds differ only in instruction text and temperature.

use crate::config::AgentParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use polish_domain::{AgentKind, AgentPromptTemplate, Message, PromptPurpose};
use std::sync::Arc;
use tracing::debug;

/// Stateless agent bound to one [`AgentKind`]
pub struct PromptAgent<G: LlmGateway + 'static> {
    kind: AgentKind,
    gateway: Arc<G>,
    params: AgentParams,
}

impl<G: LlmGateway + 'static> PromptAgent<G> {
    pub fn new(kind: AgentKind, gateway: Arc<G>, params: AgentParams) -> Self {
        Self {
            kind,
            gateway,
            params,
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Build the gateway request for `input`.
    ///
    /// `temperature` overrides the kind's default when set.
    pub fn build_request(
        &self,
        input: &str,
        purpose: PromptPurpose,
        temperature: Option<f32>,
    ) -> CompletionRequest {
        CompletionRequest::new(
            self.params.model.clone(),
            vec![
                Message::system(AgentPromptTemplate::system(self.kind, purpose)),
                Message::user(input),
            ],
            temperature.unwrap_or_else(|| self.kind.default_temperature()),
            self.params.max_tokens,
        )
    }

    /// Transform `input` into a revised prompt
    pub async fn process(&self, input: &str, purpose: PromptPurpose) -> Result<String, GatewayError> {
        self.process_with_temperature(input, purpose, None).await
    }

    /// Transform `input`, optionally overriding the sampling temperature.
    ///
    /// Returns `input` unchanged when the model produced no usable text.
    pub async fn process_with_temperature(
        &self,
        input: &str,
        purpose: PromptPurpose,
        temperature: Option<f32>,
    ) -> Result<String, GatewayError> {
        let request = self.build_request(input, purpose, temperature);
        debug!(
            "{} sending {} chars to {} (temperature {})",
            self.kind,
            input.len(),
            request.model,
            request.temperature
        );

        let text = self.gateway.complete(&request).await?;

        if text.trim().is_empty() {
            debug!("{} returned no usable text, keeping input", self.kind);
            return Ok(input.to_string());
        }
        Ok(text)
    }
}
