//! Agent domain
//!
//! - [`kind::AgentKind`]: which agent runs (rewriter, critic, finalizer)
//! - [`purpose::PromptPurpose`]: what the prompt is being optimized for

pub mod kind;
pub mod purpose;
