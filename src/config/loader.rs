//! Configuration loader with layered sources
//!
//! Loads settings from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (READGATE_*)
//! 2. Settings file (JSON, or TOML by extension)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Default settings file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    ".claude/settings.json",
    ".claude/settings.local.json",
    "~/.claude/settings.json",
];

const ENV_PREFIX: &str = "READGATE";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Load configuration from a string (useful for testing)
pub fn load_config_from_str(content: &str, format: FileFormat) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(content, format))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Start with defaults (handled by serde defaults on AppConfig)

    // 2. Add settings file
    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Settings file not found: {}",
                path
            )));
        }
        debug!(path, "Using settings file");
        builder = builder.add_source(File::new(path, file_format(path)));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                debug!(path = %expanded, "Using default settings file");
                builder = builder.add_source(File::new(&expanded, file_format(&expanded)));
                break;
            }
        }
    }

    // 3. Add environment variables with READGATE_ prefix
    // e.g., READGATE_LOGGING__LEVEL, READGATE_PERMISSIONS__DENY="Read(*.env),Read(*.pem)"
    // Double underscore (__) maps to nested keys (logging.level)
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("permissions.deny")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Pick the file format from the extension; anything but `.toml` is JSON
fn file_format(path: &str) -> FileFormat {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
        _ => FileFormat::Json,
    }
}

/// Validate configuration values
///
/// Deny pattern shape is checked when the deny list is compiled.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Invalid {
            message: format!(
                "logging.level must be one of {}, got: {}",
                LOG_LEVELS.join(", "),
                config.logging.level
            ),
        });
    }

    Ok(())
}
