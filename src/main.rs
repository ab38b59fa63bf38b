//! readgate CLI
//!
//! Checks file paths against the `Read(...)` deny patterns in a settings file.

use clap::{CommandFactory, Parser};
use readgate::{
    AppError, DenyEvaluator,
    cli::{Cli, Status, run},
    config::{AppConfig, LogFormat, load_config},
};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging(config: &AppConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(config.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match config.logging.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Parse CLI arguments
    let args = Cli::parse();

    // Load configuration
    let config = load_config(args.settings.as_deref())?;

    // Initialize logging
    init_logging(&config, args.log_level.as_deref());

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        deny_patterns = config.permissions.deny.len(),
        "Loaded settings"
    );

    // Compile the deny list; any malformed pattern aborts
    let evaluator = DenyEvaluator::from_config(&config.permissions)
        .inspect_err(|e| error!(error = %e, "Failed to compile deny patterns"))?;

    let mut stdout = std::io::stdout().lock();
    match run(&args, &evaluator, &mut stdout) {
        Ok(status) => Ok(status.into()),
        Err(AppError::Usage(e)) => {
            eprintln!("error: {}", e);
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
            Ok(Status::Failure.into())
        }
        Err(e) => Err(e.into()),
    }
}
