//! Command-line query surface
//!
//! `readgate evaluate <path>` exits non-zero when the path is denied, so the
//! binary can gate a pipeline step. `readgate show-patterns` lists the deny
//! list in order.

use crate::access_control::DenyEvaluator;
use crate::error::{AppError, UsageError};
use crate::report::{OutputFormat, write_decision, write_patterns};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

/// readgate - check file paths against Read(...) deny patterns
#[derive(Parser, Debug)]
#[command(name = "readgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (JSON, or TOML by extension)
    #[arg(short, long, global = true, env = "READGATE_SETTINGS")]
    pub settings: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "READGATE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check whether a path is denied (exit status 1 when denied)
    Evaluate {
        /// Candidate file path
        path: String,
    },
    /// List the configured deny patterns
    ShowPatterns,
}

/// Process outcome of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run one query against a compiled deny list
pub fn run(cli: &Cli, evaluator: &DenyEvaluator, out: &mut impl Write) -> Result<Status, AppError> {
    let command = cli.command.as_ref().ok_or_else(UsageError::missing_command)?;

    match command {
        Command::Evaluate { path } => {
            let decision = evaluator.evaluate(path);
            write_decision(out, path, &decision, cli.format)?;
            if decision.is_denied() {
                info!(path = %path, pattern = ?decision.matched_pattern(), "Read denied");
                Ok(Status::Failure)
            } else {
                Ok(Status::Success)
            }
        }
        Command::ShowPatterns => {
            write_patterns(out, evaluator, cli.format)?;
            Ok(Status::Success)
        }
    }
}
