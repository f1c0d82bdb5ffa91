//! Wildcard pattern compilation.

use std::fmt;

use regex::Regex;
use tracing::warn;

/// A compiled wildcard pattern.
///
/// # Examples
///
/// ```
/// use bettersync::exclude::Glob;
///
/// let glob = Glob::new("data?.json");
///
/// assert!(glob.is_match("data1.json"));
/// assert!(!glob.is_match("data10.json"));
/// ```
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    /// `None` when the translated regex failed to compile; such a glob
    /// matches nothing.
    regex: Option<Regex>,
}

impl Glob {
    /// Compiles `pattern`.
    ///
    /// Compilation never fails: a pattern whose translation is rejected by
    /// the regex engine (e.g. exceeds its size limit) is kept but matches
    /// nothing.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let regex = match Regex::new(&translate(&pattern)) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Glob pattern cannot be compiled and will match nothing");
                None
            }
        };

        Self { pattern, regex }
    }

    /// Returns the pattern text as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the whole of `candidate` matches the pattern.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(candidate))
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Translates a wildcard pattern into an anchored regex.
///
/// Every regex metacharacter is escaped, then the escaped `*` and `?` are
/// turned back into `.*` and `.`.
pub(crate) fn translate(pattern: &str) -> String {
    let body = regex::escape(pattern)
        .replace(r"\*", ".*")
        .replace(r"\?", ".");

    format!("^{body}$")
}
