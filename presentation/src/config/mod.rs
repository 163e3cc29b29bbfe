//! Presentation-level configuration
//!
//! Resolves how results and progress are shown from CLI flags and the
//! `[output]` config section.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use polish_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show per-agent progress on stderr
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// CLI flags win over the config file, which wins over defaults
    pub fn resolve(
        cli_format: Option<CliOutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        Self {
            format: cli_format
                .map(OutputFormat::from)
                .or(file_format)
                .unwrap_or_default(),
            color,
            show_progress: !quiet,
        }
    }

    /// Apply the color preference process-wide
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config =
            OutputConfig::resolve(Some(CliOutputFormat::Json), Some(OutputFormat::Full), true, false);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.show_progress);
    }

    #[test]
    fn test_file_format_then_default() {
        assert_eq!(
            OutputConfig::resolve(None, Some(OutputFormat::Full), true, false).format,
            OutputFormat::Full
        );
        let config = OutputConfig::resolve(None, None, false, true);
        assert_eq!(config.format, OutputFormat::Final);
        assert!(!config.color);
        assert!(!config.show_progress);
    }
}
