//! Port definitions (interfaces implemented by outer layers)

pub mod conversation_logger;
pub mod llm_gateway;
pub mod progress;
