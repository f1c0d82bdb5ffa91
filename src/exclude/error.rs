//! Error types for loading exclusion rules.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for exclusion rule loading.
///
/// A missing rule file is not an error; it yields an empty matcher.
#[derive(Debug, Error)]
pub enum ExcludeError {
    /// The rule file exists but could not be read.
    #[error("Failed to read ignore file '{}': {source}", path.display())]
    Read {
        /// Path to the rule file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
