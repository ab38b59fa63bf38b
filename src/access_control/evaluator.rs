//! Deny list evaluation
//!
//! Holds the compiled deny patterns in configuration order and answers
//! "is this path denied?" queries. The first matching pattern is reported;
//! no ranking between patterns is attempted.

use crate::access_control::decision::Decision;
use crate::access_control::patterns::CompiledPattern;
use crate::config::PermissionsConfig;
use crate::error::PatternResult;
use tracing::{debug, trace};

/// Ordered, immutable deny list
///
/// Built once from configuration and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct DenyEvaluator {
    patterns: Vec<CompiledPattern>,
}

impl DenyEvaluator {
    /// Compile a list of raw `Read(...)` patterns
    ///
    /// Fails on the first pattern that does not compile; no partial deny
    /// list is ever produced.
    pub fn new(patterns: &[String]) -> PatternResult<Self> {
        let compiled = patterns
            .iter()
            .map(|p| CompiledPattern::compile(p))
            .collect::<PatternResult<Vec<_>>>()?;

        debug!(count = compiled.len(), "Compiled deny patterns");
        Ok(Self { patterns: compiled })
    }

    pub fn from_config(config: &PermissionsConfig) -> PatternResult<Self> {
        Self::new(&config.deny)
    }

    /// Create an empty deny list (allows everything)
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Check a candidate path
    pub fn evaluate(&self, path: &str) -> Decision {
        match self.find_match(path) {
            Some(pattern) => {
                trace!(pattern = pattern.source(), "Matched deny pattern");
                debug!(path, decision = "denied", "Evaluated path");
                Decision::Denied {
                    matched_pattern: pattern.source().to_string(),
                    matcher_text: pattern.matcher_text().to_string(),
                }
            }
            None => {
                debug!(path, decision = "allowed", "Evaluated path");
                Decision::Allowed
            }
        }
    }

    /// First pattern, in configuration order, that matches the path
    pub fn find_match(&self, path: &str) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.matches(path))
    }

    /// Raw patterns with their 1-based position
    pub fn patterns(&self) -> impl Iterator<Item = (usize, &str)> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (i + 1, p.source()))
    }

    pub fn compiled(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    fn evaluator(patterns: &[&str]) -> DenyEvaluator {
        let owned: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        DenyEvaluator::new(&owned).unwrap()
    }

    #[test]
    fn test_empty_allows_everything() {
        let eval = DenyEvaluator::empty();
        assert!(eval.is_empty());
        assert!(eval.evaluate("/etc/shadow").is_allowed());
        assert!(eval.evaluate("").is_allowed());
        assert!(DenyEvaluator::default().evaluate(".env").is_allowed());
    }

    #[test]
    fn test_denied_carries_pattern_and_matcher() {
        let eval = evaluator(&["Read(*.env)"]);
        assert_eq!(
            eval.evaluate("config/.env"),
            Decision::Denied {
                matched_pattern: "Read(*.env)".into(),
                matcher_text: r"[^/]*\.env$".into(),
            }
        );
        assert!(eval.evaluate("readme.md").is_allowed());
    }

    #[test]
    fn test_first_match_wins() {
        let eval = evaluator(&["Read(*.md)", "Read(**/*.pem)", "Read(*.pem)"]);
        let decision = eval.evaluate("certs/server.pem");
        assert_eq!(decision.matched_pattern(), Some("Read(**/*.pem)"));

        let reordered = evaluator(&["Read(*.pem)", "Read(**/*.pem)"]);
        let decision = reordered.evaluate("certs/server.pem");
        assert_eq!(decision.matched_pattern(), Some("Read(*.pem)"));
    }

    #[test]
    fn test_fail_fast_on_first_malformed() {
        let patterns = vec![
            "Read(*.env)".to_string(),
            "*.key".to_string(),
            "Read(*.pem".to_string(),
        ];
        let err = DenyEvaluator::new(&patterns).unwrap_err();
        assert_eq!(err, PatternError::malformed("*.key"));
    }

    #[test]
    fn test_patterns_are_one_indexed_in_order() {
        let eval = evaluator(&["Read(**/*.key)", "Read(*.pem)"]);
        let listed: Vec<_> = eval.patterns().collect();
        assert_eq!(listed, vec![(1, "Read(**/*.key)"), (2, "Read(*.pem)")]);
        assert_eq!(eval.len(), 2);
        assert_eq!(eval.compiled()[1].matcher_text(), r"[^/]*\.pem$");
    }

    #[test]
    fn test_from_config() {
        let config = PermissionsConfig {
            deny: vec!["Read(**/secrets/**)".to_string()],
        };
        let eval = DenyEvaluator::from_config(&config).unwrap();
        assert!(eval.evaluate("/home/user/app/secrets/key.pem").is_denied());
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DenyEvaluator>();

        let eval = std::sync::Arc::new(evaluator(&["Read(*.env)"]));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let eval = eval.clone();
                std::thread::spawn(move || eval.evaluate(&format!("app{i}/.env")).is_denied())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
