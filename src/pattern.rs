//! Pattern matching primitives for path globs and message regexes.
//!
//! The two capability traits keep the concrete matching libraries out of
//! the config model: [`PathPattern`] is what a "paths" key compiles to and
//! [`TextPattern`] is what an "ignore" entry compiles to. Tests can swap
//! in fakes without touching the decode logic.

use globset::{Glob, GlobMatcher};
use regex::Regex;

/// A compiled pattern tested against normalized file paths
pub trait PathPattern: Send + Sync {
    /// Whether the pattern matches the given `/`-separated path
    fn matches(&self, path: &str) -> bool;
}

/// A compiled pattern searched for anywhere inside diagnostic text
pub trait TextPattern: Send + Sync {
    /// Whether the pattern matches somewhere within `text`
    fn find(&self, text: &str) -> bool;
}

/// Glob-based path pattern backed by `globset`.
///
/// Uses default globset semantics, so `*` may cross `/` and `**` matches
/// any number of path components.
pub struct GlobPattern {
    matcher: GlobMatcher,
}

impl GlobPattern {
    /// Compile a glob pattern. Fails on malformed patterns such as an
    /// unclosed character class.
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let glob = Glob::new(pattern)?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }
}

impl PathPattern for GlobPattern {
    fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

/// Regex-based text pattern backed by the `regex` crate
pub struct RegexPattern {
    regex: Regex,
}

impl RegexPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl TextPattern for RegexPattern {
    fn find(&self, text: &str) -> bool {
        // Substring search, not an anchored match.
        self.regex.is_match(text)
    }
}
