//! Error types for readgate
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors that are part of the API;
//! the binary wraps them in `anyhow` only at the process boundary.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Deny pattern compilation errors
///
/// Any of these is fatal to building a deny list: a pattern that cannot be
/// compiled is never treated as "matches nothing".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Malformed pattern '{pattern}': expected the form Read(<glob>)")]
    Malformed { pattern: String },

    #[error("Invalid pattern '{pattern}': {reason}")]
    Invalid { pattern: String, reason: String },
}

impl PatternError {
    pub fn malformed(pattern: impl Into<String>) -> Self {
        Self::Malformed {
            pattern: pattern.into(),
        }
    }

    /// The raw pattern string that failed to compile
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::Malformed { pattern } | PatternError::Invalid { pattern, .. } => pattern,
        }
    }
}

/// The query surface was invoked without a required argument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UsageError {
    pub message: String,
}

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn missing_command() -> Self {
        Self::new("a command is required (evaluate <path> or show-patterns)")
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for pattern compilation
pub type PatternResult<T> = std::result::Result<T, PatternError>;
