//! Console output formatter for optimization results

use colored::Colorize;
use polish_domain::{AgentFeedback, OutputFormat, PromptOptimizationResult, PromptPurpose};

/// Formats optimization results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to the selected output format
    pub fn render(format: OutputFormat, result: &PromptOptimizationResult) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Final => Self::format_final(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete result: original, every agent step, optimized prompt
    pub fn format(result: &PromptOptimizationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Prompt Optimization Results"));
        output.push('\n');

        output.push_str(&Self::section_header("Original Prompt"));
        output.push_str(&format!("\n{}\n", Self::indent(&result.original_prompt, "  ")));

        if !result.agent_feedback.is_empty() {
            output.push_str(&Self::section_header("Agent Feedback"));
            for (step, entry) in result.agent_feedback.iter().enumerate() {
                output.push_str(&Self::format_feedback(step + 1, entry));
            }
        }

        output.push_str(&Self::section_header("Optimized Prompt"));
        output.push_str(&format!("\n{}\n", result.optimized_prompt));

        if !result.is_changed() {
            output.push_str(&format!("\n{}\n", "(prompt unchanged)".dimmed()));
        }

        output.push_str(&Self::footer());

        output
    }

    fn format_feedback(step: usize, entry: &AgentFeedback) -> String {
        let title = format!("── {}. {} ──", step, entry.agent_type.display_name());
        let mut block = format!("\n{}\n", title.yellow().bold());

        if entry.feedback == entry.suggestion {
            block.push_str(&format!("{}\n", entry.suggestion));
            return block;
        }
        if !entry.feedback.is_empty() {
            block.push_str(&format!("{}\n{}\n", "Feedback:".cyan(), entry.feedback));
        }
        if !entry.suggestion.is_empty() {
            block.push_str(&format!("{}\n{}\n", "Suggestion:".cyan(), entry.suggestion));
        }
        block
    }

    /// Format as JSON (the persisted result shape)
    pub fn format_json(result: &PromptOptimizationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Only the optimized prompt, suitable for piping
    pub fn format_final(result: &PromptOptimizationResult) -> String {
        result.optimized_prompt.clone()
    }

    /// Table of every prompt purpose
    pub fn format_purposes() -> String {
        let mut output = format!("{}\n\n", "Prompt purposes".cyan().bold());
        for purpose in PromptPurpose::ALL {
            let marker = if purpose == PromptPurpose::default() {
                " (default)"
            } else {
                ""
            };
            output.push_str(&format!(
                "  {:<28} {}{}\n      {}\n",
                purpose.as_str().bold(),
                purpose.label(),
                marker.dimmed(),
                purpose.description().dimmed()
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
