//! readgate
//!
//! A read-access gate: checks candidate file paths against an ordered list
//! of glob-style `Read(<glob>)` deny patterns.
//!
//! ## Features
//!
//! - **Glob deny rules** with `*` (one segment) and `**` (any depth)
//! - **Suffix anchoring** so rules written for absolute paths also catch
//!   relative ones
//! - **First-match reporting** with the derived regex for auditing
//! - **Pipeline-friendly CLI**: a denied path exits with a failure status
//!
//! ## Example Settings
//!
//! ```json
//! {
//!   "permissions": {
//!     "deny": ["Read(**/.env)", "Read(**/secrets/**)", "Read(*.pem)"]
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use readgate::DenyEvaluator;
//!
//! let evaluator = DenyEvaluator::new(&["Read(src/**/secret.txt)".to_string()]).unwrap();
//! assert!(evaluator.evaluate("src/secret.txt").is_denied());
//! assert!(evaluator.evaluate("src/main.rs").is_allowed());
//! ```

pub mod access_control;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;

// Re-export main types
pub use access_control::{CompiledPattern, Decision, DenyEvaluator};
pub use config::{AppConfig, load_config};
pub use error::{AppError, PatternError, Result, UsageError};
