//! Chat-completions gateway adapter
//!
//! Implements the [`LlmGateway`](polish_application::LlmGateway) port over
//! an OpenAI-compatible HTTP endpoint (NVIDIA-hosted Llama by default).
//!
//! - `protocol`: Request/response wire types and response decoding
//! - `http`: [`HttpLlmGateway`], the reqwest-based adapter

mod http;
pub mod protocol;

pub use http::HttpLlmGateway;
