//! Configuration module
//!
//! Loads the permission settings (the `permissions.deny` list) and logging
//! options from JSON/TOML files and environment variables.

pub mod loader;
pub mod types;

pub use ::config::FileFormat;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
