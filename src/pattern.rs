//! Filename pattern matching.
//!
//! A filename pattern is a plain file name in which `*` stands for any
//! sequence of characters, including none. Every other character is taken
//! literally, so `report[1].txt` or `a+b.log` only match themselves. The
//! whole name must match: `*.txt` accepts `a.txt` but not `a.txt.bak`.

use crate::error::{MonitorError, Result};
use glob::{MatchOptions, Pattern};
use std::path;

/// The only character with matching power.
pub const WILDCARD: char = '*';

/// Match options shared by every compiled pattern.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled filename pattern.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    /// Pattern text as supplied by the caller.
    source: String,
    /// Compiled glob with every non-wildcard character escaped.
    compiled: Pattern,
}

impl FilenamePattern {
    /// Compile a filename pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::InvalidPattern`] if:
    /// - The pattern is empty
    /// - The pattern contains a path separator
    /// - The composed glob is rejected by the matcher
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(MonitorError::invalid_pattern(raw, "pattern is empty"));
        }

        if raw.chars().any(path::is_separator) {
            return Err(MonitorError::invalid_pattern(
                raw,
                "a filename pattern cannot contain a path separator",
            ));
        }

        let compiled = Pattern::new(&to_glob(raw))
            .map_err(|e| MonitorError::invalid_pattern(raw, e.msg))?;

        Ok(Self {
            source: raw.to_string(),
            compiled,
        })
    }

    /// Returns `true` if `filename` matches the whole pattern.
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        self.compiled.matches_with(filename, MATCH_OPTIONS)
    }

    /// The pattern as it was given, before wildcard expansion.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Translate a filename pattern into glob syntax.
///
/// Literal runs are escaped so that only [`WILDCARD`] keeps its meaning,
/// and consecutive wildcards collapse into one.
fn to_glob(raw: &str) -> String {
    let mut glob = String::with_capacity(raw.len() * 2);
    for (i, literal) in raw.split(WILDCARD).enumerate() {
        if i > 0 && !glob.ends_with(WILDCARD) {
            glob.push(WILDCARD);
        }
        glob.push_str(&Pattern::escape(literal));
    }
    glob
}
