//! Rendering of decisions and pattern listings
//!
//! Text output is line-oriented for humans and shell pipelines; JSON output
//! is a single document per invocation.

use crate::access_control::{Decision, DenyEvaluator};
use crate::error::AppError;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Output format for the query surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct DecisionReport<'a> {
    path: &'a str,
    #[serde(flatten)]
    decision: &'a Decision,
}

#[derive(Serialize)]
struct PatternEntry<'a> {
    index: usize,
    pattern: &'a str,
    matcher_text: &'a str,
}

/// Write the outcome of evaluating `path`
pub fn write_decision(
    out: &mut impl Write,
    path: &str,
    decision: &Decision,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => match decision {
            Decision::Denied {
                matched_pattern,
                matcher_text,
            } => {
                writeln!(out, "DENIED: {}", path)?;
                writeln!(out, "Matched pattern: {}", matched_pattern)?;
                writeln!(out, "Regex: {}", matcher_text)?;
            }
            Decision::Allowed => {
                writeln!(out, "ALLOWED: {}", path)?;
                writeln!(out, "No deny patterns matched")?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &DecisionReport { path, decision })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the deny list, 1-indexed, in configuration order
pub fn write_patterns(
    out: &mut impl Write,
    evaluator: &DenyEvaluator,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Deny patterns:")?;
            for (index, pattern) in evaluator.patterns() {
                writeln!(out, "  {}. {}", index, pattern)?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = evaluator
                .compiled()
                .iter()
                .enumerate()
                .map(|(i, p)| PatternEntry {
                    index: i + 1,
                    pattern: p.source(),
                    matcher_text: p.matcher_text(),
                })
                .collect();
            serde_json::to_writer(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
