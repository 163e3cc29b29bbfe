//! Prompt domain
//!
//! Instruction templates sent to the hosted model by each agent.

mod template;

pub use template::AgentPromptTemplate;
