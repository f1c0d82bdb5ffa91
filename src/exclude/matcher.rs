//! Exclusion matcher built from an ignore-rule file.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::error::ExcludeError;
use super::glob::Glob;

/// Ordered set of exclusion patterns.
///
/// Read-only after construction. An empty matcher excludes nothing.
///
/// # Examples
///
/// ```
/// use bettersync::exclude::ExclusionMatcher;
///
/// let matcher = ExclusionMatcher::from_rules("# build output\n*.tmp\n\ntarget*\n");
///
/// assert_eq!(matcher.len(), 2);
/// assert!(matcher.is_excluded("file.tmp"));
/// assert!(!matcher.is_excluded("file.tmp.bak"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher {
    globs: Vec<Glob>,
}

impl ExclusionMatcher {
    /// Creates an empty matcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matcher from rule-file content.
    ///
    /// Each line is trimmed; blank lines and lines starting with `#` are
    /// skipped.
    #[must_use]
    pub fn from_rules(content: &str) -> Self {
        Self {
            globs: content.lines().filter_map(rule_pattern).map(Glob::new).collect(),
        }
    }

    /// Builds a matcher from already-extracted patterns, in order.
    #[must_use]
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            globs: patterns.into_iter().map(Glob::new).collect(),
        }
    }

    /// Loads rules from the file at `path`.
    ///
    /// A missing file, or a path that is not a regular file, yields an empty
    /// matcher. Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ExcludeError::Read`] if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self, ExcludeError> {
        let read_error = |source| ExcludeError::Read {
            path: path.to_path_buf(),
            source,
        };

        match std::fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => {
                debug!(path = %path.display(), "Ignore path is not a file; nothing excluded");
                return Ok(Self::new());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No ignore file; nothing excluded");
                return Ok(Self::new());
            }
            Err(e) => return Err(read_error(e)),
        }

        let bytes = std::fs::read(path).map_err(read_error)?;
        let matcher = Self::from_rules(&String::from_utf8_lossy(&bytes));
        debug!(path = %path.display(), patterns = matcher.len(), "Loaded ignore rules");
        Ok(matcher)
    }

    /// Appends one more pattern after the existing ones.
    ///
    /// The pattern is trimmed; a blank pattern is ignored.
    #[must_use]
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        let pattern = pattern.trim();
        if !pattern.is_empty() {
            self.globs.push(Glob::new(pattern));
        }
        self
    }

    /// Returns true if `candidate` matches any pattern.
    #[must_use]
    pub fn is_excluded(&self, candidate: &str) -> bool {
        self.globs.iter().any(|glob| glob.is_match(candidate))
    }

    /// Returns true if the path's string form matches any pattern.
    ///
    /// Non-UTF-8 path components are replaced before matching.
    #[must_use]
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        self.is_excluded(&path.to_string_lossy())
    }

    /// Returns the patterns in rule-file order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.globs.iter().map(Glob::as_str)
    }

    /// Returns the number of active patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.globs.len()
    }

    /// Returns true if no patterns are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }
}

/// Returns the pattern on `line`, or `None` for blank and comment lines.
fn rule_pattern(line: &str) -> Option<&str> {
    let line = line.trim();
    (!line.is_empty() && !line.starts_with('#')).then_some(line)
}
