//! Pattern compilation for read deny rules
//!
//! Turns a `Read(<glob>)` expression into a suffix-anchored regex.
//!
//! Glob syntax:
//! - `**/` matches zero or more complete path segments
//! - `**` anywhere else matches any characters, `/` included
//! - `*` matches any characters within a single segment
//! - everything else is literal
//!
//! The regex is anchored at the end of the candidate path only, so a pattern
//! describes a path suffix: `Read(*.env)` denies `config/.env` as well as
//! `/srv/app/.env`.

use crate::error::{PatternError, PatternResult};
use regex::Regex;

const WRAPPER_PREFIX: &str = "Read(";
const WRAPPER_SUFFIX: char = ')';

/// Expansion of `**/`: nothing, or any run of characters ending in `/`
const ANY_SEGMENTS: &str = "(?:.*/)?";
/// Expansion of a `**` that does not precede a separator
const ANY_CHARS: &str = ".*";
/// Expansion of `*`
const SEGMENT_CHARS: &str = "[^/]*";

/// A single compiled deny pattern
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a raw `Read(<glob>)` pattern
    pub fn compile(raw: &str) -> PatternResult<Self> {
        let glob = extract_glob(raw)?;
        let expr = glob_to_regex(glob);
        let regex = Regex::new(&expr).map_err(|e| PatternError::Invalid {
            pattern: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: raw.to_string(),
            regex,
        })
    }

    /// The raw pattern as supplied, wrapper included
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The unwrapped glob
    pub fn glob(&self) -> &str {
        &self.source[WRAPPER_PREFIX.len()..self.source.len() - WRAPPER_SUFFIX.len_utf8()]
    }

    /// Textual form of the derived regex, for diagnostics
    pub fn matcher_text(&self) -> &str {
        self.regex.as_str()
    }

    /// Check if a candidate path ends with a match for this pattern
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Strip the `Read(...)` wrapper, failing on any other shape
pub fn extract_glob(raw: &str) -> PatternResult<&str> {
    raw.strip_prefix(WRAPPER_PREFIX)
        .and_then(|rest| rest.strip_suffix(WRAPPER_SUFFIX))
        .ok_or_else(|| PatternError::malformed(raw))
}

/// Translate a glob into a regex source string anchored at the end
///
/// Single left-to-right pass, so an expansion is never expanded again.
pub fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() * 2 + 1);
    let mut literal = String::new();
    let mut chars = glob.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '*' {
            literal.push(c);
            continue;
        }

        out.push_str(&regex::escape(&literal));
        literal.clear();

        if chars.next_if_eq(&'*').is_some() {
            if chars.next_if_eq(&'/').is_some() {
                out.push_str(ANY_SEGMENTS);
            } else {
                out.push_str(ANY_CHARS);
            }
        } else {
            out.push_str(SEGMENT_CHARS);
        }
    }

    out.push_str(&regex::escape(&literal));
    out.push('$');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(raw: &str) -> CompiledPattern {
        CompiledPattern::compile(raw).unwrap()
    }

    #[test]
    fn test_extract_glob() {
        assert_eq!(extract_glob("Read(*.env)").unwrap(), "*.env");
        assert_eq!(extract_glob("Read()").unwrap(), "");
        assert_eq!(extract_glob("Read(a(b))").unwrap(), "a(b)");
    }

    #[test]
    fn test_extract_glob_rejects_other_shapes() {
        for raw in [
            "*.env",
            "Read(*.env",
            "Read*.env)",
            "read(*.env)",
            " Read(*.env)",
            "Read(*.env) ",
            "Write(*.env)",
            "",
        ] {
            let err = extract_glob(raw).unwrap_err();
            assert_eq!(err, PatternError::malformed(raw), "input: {raw:?}");
        }
    }

    #[test]
    fn test_glob_to_regex_translation() {
        assert_eq!(glob_to_regex("*.env"), r"[^/]*\.env$");
        assert_eq!(glob_to_regex("src/**/secret.txt"), r"src/(?:.*/)?secret\.txt$");
        assert_eq!(glob_to_regex("**/secrets/**"), r"(?:.*/)?secrets/.*$");
        assert_eq!(glob_to_regex("id_rsa"), "id_rsa$");
        assert_eq!(glob_to_regex(""), "$");
    }

    #[test]
    fn test_special_characters_are_literal() {
        let p = compile(r"Read(a.b+c?d^e$f{1}(g)|h[i]\j)");
        assert!(p.matches(r"a.b+c?d^e$f{1}(g)|h[i]\j"));
        assert!(!p.matches(r"aXb+c?d^e$f{1}(g)|h[i]\j"));
        assert!(!p.matches("abbc"));
    }

    #[test]
    fn test_single_star_stays_in_segment() {
        let p = compile("Read(config/*.json)");
        assert!(p.matches("config/app.json"));
        assert!(p.matches("/etc/config/app.json"));
        assert!(!p.matches("config/nested/app.json"));
    }

    #[test]
    fn test_double_star_matches_zero_segments() {
        let p = compile("Read(src/**/secret.txt)");
        assert!(p.matches("src/secret.txt"));
        assert!(p.matches("src/a/secret.txt"));
        assert!(p.matches("src/a/b/c/secret.txt"));
        assert!(!p.matches("src/notsecret.txt"));
    }

    #[test]
    fn test_trailing_double_star_spans_segments() {
        let p = compile("Read(secrets/**)");
        assert!(p.matches("secrets/key.pem"));
        assert!(p.matches("secrets/deep/nested/key.pem"));
        assert!(!p.matches("secrets"));
    }

    #[test]
    fn test_literal_pattern_is_suffix_match() {
        let p = compile("Read(.env)");
        assert!(p.matches(".env"));
        assert!(p.matches("project/.env"));
        assert!(!p.matches(".env.example"));
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let p = compile("Read(données/*.txt)");
        assert!(p.matches("/home/données/a.txt"));
        assert!(!p.matches("/home/DONNÉES/a.txt"));
    }

    #[test]
    fn test_accessors() {
        let p = compile("Read(**/*.key)");
        assert_eq!(p.source(), "Read(**/*.key)");
        assert_eq!(p.glob(), "**/*.key");
        assert_eq!(p.matcher_text(), r"(?:.*/)?[^/]*\.key$");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let a = compile("Read(**/.ssh/*)");
        let b = compile("Read(**/.ssh/*)");
        assert_eq!(a.matcher_text(), b.matcher_text());
        for path in ["/home/u/.ssh/id_rsa", ".ssh/config", "/home/u/ssh/id_rsa"] {
            assert_eq!(a.matches(path), b.matches(path), "path: {path}");
        }
    }
}
