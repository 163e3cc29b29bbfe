//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use polish_domain::{AgentKind, OptimizationConfig, OptimizationMode, PromptPurpose};
use std::path::PathBuf;

/// Output format for optimization results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Original prompt, every agent step and the optimized prompt
    Full,
    /// Only the optimized prompt
    Final,
    /// JSON output
    Json,
}

impl From<OutputFormat> for polish_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => polish_domain::OutputFormat::Full,
            OutputFormat::Final => polish_domain::OutputFormat::Final,
            OutputFormat::Json => polish_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for prompt-polish
#[derive(Parser, Debug)]
#[command(name = "prompt-polish")]
#[command(author, version, about = "Refine LLM prompts through a pipeline of rewriting agents")]
#[command(long_about = r#"
prompt-polish runs your prompt through a small pipeline of LLM agents:

1. Rewriter:  improves clarity and structure
2. Critic:    analyzes the prompt for potential improvements
3. Finalizer: creates the optimized final version

Modes: sequential (agents chained in order), parallel (agents work on the
original independently, the finalizer merges), critique (critic and
rewriter alternate, then the finalizer polishes).

Configuration files are loaded from (in priority order):
1. POLISH_* environment variables (e.g. POLISH_GATEWAY__MODEL)
2. --config <path>     Explicit config file
3. ./polish.toml       Project-level config
4. ~/.config/prompt-polish/config.toml   Global config

Example:
  prompt-polish optimize "write about cats"
  prompt-polish optimize -p code_generation -m critique -n 2 "parse a CSV file"
  prompt-polish optimize --save draft.json "explain monads"
  prompt-polish regenerate --from draft.json --feedback "shorter" --save draft.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file, then "final")
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Optimize a prompt
    Optimize(OptimizeArgs),
    /// Re-run the finalizer on a saved result using your feedback
    Regenerate(RegenerateArgs),
    /// List the available prompt purposes
    Purposes,
}

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// The prompt to optimize
    pub prompt: String,

    /// What the prompt will be used for (e.g. article_writing, code_review)
    #[arg(short, long, value_name = "PURPOSE")]
    pub purpose: Option<PromptPurpose>,

    /// Orchestration mode: sequential, parallel or critique
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<OptimizationMode>,

    /// Agents to run, in order (can be specified multiple times)
    #[arg(short, long = "agent", value_name = "AGENT")]
    pub agents: Vec<AgentKind>,

    /// Number of passes (sequential) or critique rounds (critique)
    #[arg(short = 'n', long, value_name = "N")]
    pub iterations: Option<usize>,

    /// Sampling temperature for every agent (overrides per-agent defaults)
    #[arg(short, long, value_name = "T")]
    pub temperature: Option<f32>,

    /// Save the result as JSON for a later `regenerate`
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

impl OptimizeArgs {
    /// Overlay the flags that were given on top of `base`
    pub fn apply(&self, base: OptimizationConfig) -> OptimizationConfig {
        let mut config = base;
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if !self.agents.is_empty() {
            config = config.with_agents(self.agents.clone());
        }
        if let Some(iterations) = self.iterations {
            config = config.with_max_iterations(iterations);
        }
        if let Some(temperature) = self.temperature {
            config = config.with_temperature(temperature);
        }
        if let Some(purpose) = self.purpose {
            config = config.with_purpose(purpose);
        }
        config
    }
}

#[derive(Args, Debug)]
pub struct RegenerateArgs {
    /// Saved result to regenerate from
    #[arg(long, value_name = "PATH")]
    pub from: PathBuf,

    /// What to change about the current optimized prompt
    #[arg(short, long, value_name = "TEXT")]
    pub feedback: String,

    /// Purpose for the finalizer (defaults to the configured purpose)
    #[arg(short, long, value_name = "PURPOSE")]
    pub purpose: Option<PromptPurpose>,

    /// Save the merged result (may be the same file as --from)
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}
