//! Access control module
//!
//! Decides whether a file path may be read, given a list of glob-style deny
//! patterns.
//!
//! ## Pattern Model
//!
//! Each deny rule has the form `Read(<glob>)`:
//!
//! - `*` matches within one path segment
//! - `**/` matches zero or more whole segments
//! - a trailing `**` matches everything below a directory
//!
//! Patterns are anchored at the end of the path only, so they describe path
//! suffixes. Rules are checked in configuration order and the first match is
//! reported; any match denies.
//!
//! ## Example Configuration
//!
//! ```json
//! {
//!   "permissions": {
//!     "deny": [
//!       "Read(**/.env)",
//!       "Read(**/secrets/**)",
//!       "Read(*.pem)"
//!     ]
//!   }
//! }
//! ```

pub mod decision;
pub mod evaluator;
pub mod patterns;

pub use decision::Decision;
pub use evaluator::DenyEvaluator;
pub use patterns::CompiledPattern;
