//! CLI entrypoint for prompt-polish
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use polish_application::{
    AgentParams, NoProgress, OptimizationProgress, OptimizePromptUseCase,
};
use polish_infrastructure::{ConfigLoader, FileConfig, HttpLlmGateway, JsonlConversationLogger};
use polish_presentation::{
    Cli, Command, ConsoleFormatter, OptimizeArgs, OutputConfig, ProgressReporter, RegenerateArgs,
    ResultSession, SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_logging(cli.verbose, &config);

    info!("Starting prompt-polish");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        print_effective_config(&config)?;
        return Ok(());
    }

    config.validate().context("Invalid configuration")?;

    let output = OutputConfig::resolve(
        cli.output,
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    output.apply_color();

    let Some(command) = cli.command else {
        bail!("No command given. Try `prompt-polish optimize \"<prompt>\"` or --help.");
    };

    match command {
        Command::Purposes => {
            print!("{}", ConsoleFormatter::format_purposes());
            Ok(())
        }
        Command::Optimize(args) => optimize(args, &config, &output).await,
        Command::Regenerate(args) => regenerate(args, &config, &output).await,
    }
}

/// Stderr logging filtered by `-v`, plus a daily-rolling file when
/// `[logging] dir` is set.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match &config.logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "prompt-polish.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn print_effective_config(config: &FileConfig) -> Result<()> {
    let mut shown = config.clone();
    if shown.gateway.api_key.is_some() {
        shown.gateway.api_key = Some("<redacted>".to_string());
    }

    println!("Effective configuration:");
    println!("{}", toml::to_string_pretty(&shown)?);
    println!(
        "API key: {} (from gateway.api_key or ${})",
        if config.gateway.resolve_api_key().is_some() {
            "set"
        } else {
            "missing"
        },
        config.gateway.api_key_env
    );
    Ok(())
}

/// Build the use case with the HTTP gateway and optional transcript
fn build_use_case(config: &FileConfig) -> Result<Arc<OptimizePromptUseCase<HttpLlmGateway>>> {
    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpLlmGateway::from_config(&config.gateway).context("Failed to create model gateway")?,
    );

    let params = AgentParams::default()
        .with_model(config.gateway.parse_model())
        .with_max_tokens(config.gateway.max_tokens);

    let mut use_case = OptimizePromptUseCase::with_params(gateway, params);

    if let Some(path) = &config.logging.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Writing conversation transcript to {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    Ok(Arc::new(use_case))
}

/// Spinners on a terminal, plain lines otherwise
fn progress_for(output: &OutputConfig) -> Box<dyn OptimizationProgress> {
    if !output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}

async fn optimize(args: OptimizeArgs, config: &FileConfig, output: &OutputConfig) -> Result<()> {
    let run_config = args.apply(config.optimization.to_optimization_config()?);

    let mut session = ResultSession::new(build_use_case(config)?);
    session.set_prompt(args.prompt);

    let progress = progress_for(output);
    let result = session.optimize(&run_config, &*progress).await?;
    drop(progress);

    println!("{}", ConsoleFormatter::render(output.format, result));

    if let Some(path) = &args.save {
        session.save(path)?;
        info!("Saved result to {}", path.display());
    }

    Ok(())
}

async fn regenerate(
    args: RegenerateArgs,
    config: &FileConfig,
    output: &OutputConfig,
) -> Result<()> {
    let prior = ResultSession::<HttpLlmGateway>::load(&args.from)?;
    let purpose = match args.purpose {
        Some(purpose) => purpose,
        None => config.optimization.parse_purpose()?,
    };

    let mut session = ResultSession::new(build_use_case(config)?);
    session.restore(prior);
    session.set_purpose(purpose);
    session.set_feedback(args.feedback);

    let progress = progress_for(output);
    let result = session.regenerate(&*progress).await?;
    drop(progress);

    println!("{}", ConsoleFormatter::render(output.format, result));

    if let Some(path) = &args.save {
        session.save(path)?;
        info!("Saved result to {}", path.display());
    }

    Ok(())
}
