//! Evaluation results

use serde::Serialize;

/// Result of checking one candidate path against a deny list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum Decision {
    /// No deny pattern matched
    Allowed,
    /// The first matching pattern, in deny list order
    Denied {
        /// Raw `Read(...)` pattern as configured
        matched_pattern: String,
        /// Derived regex text
        matcher_text: String,
    },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Denied { .. })
    }

    pub fn matched_pattern(&self) -> Option<&str> {
        match self {
            Decision::Allowed => None,
            Decision::Denied {
                matched_pattern, ..
            } => Some(matched_pattern),
        }
    }
}
