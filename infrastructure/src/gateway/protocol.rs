//! Wire types for the OpenAI-compatible chat-completions API.

use polish_application::{CompletionRequest, GatewayError};
use polish_domain::Message;
use serde::{Deserialize, Serialize};

/// Message used when the body lacks `choices[0].message`
pub const INVALID_RESPONSE: &str = "Invalid response format from API";

/// `POST /chat/completions` body
#[derive(Debug, Serialize)]
pub struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f32,
    pub max_tokens: u32,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionBody<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// Extract the generated text from a successful response body.
///
/// A present message with null content yields an empty string; the agent
/// decides what an empty reply means.
pub fn parse_completion(body: &str) -> Result<String, GatewayError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("{}: {}", INVALID_RESPONSE, e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .map(|message| message.content.unwrap_or_default())
        .ok_or_else(|| GatewayError::InvalidResponse(INVALID_RESPONSE.to_string()))
}
