//! Presentation layer for prompt-polish
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters, and the client-side result session.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OptimizeArgs, OutputFormat, RegenerateArgs};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use session::{ResultSession, SessionError};
