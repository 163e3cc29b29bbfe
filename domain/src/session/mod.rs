//! Conversation domain.
//!
//! - [`entities::Message`]: a role-tagged message sent to the model

pub mod entities;
