//! Error types for configuration loading and validation.

use std::fmt;
use std::io;

use crate::algebra::ErrorRecord;

/// Classification of configuration-load failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// Failure that fits no other kind.
    Unknown,
    /// The configuration file does not exist.
    FileNotFound,
    /// The file exists but could not be opened due to permissions or sharing.
    AccessDenied,
    /// The document decoded but violates a structural rule.
    InvalidConfiguration,
    /// The path is empty or blank.
    InvalidFileName,
    /// The content is not valid JSON or does not fit the schema.
    DeserializeError,
    /// Any other failure while loading the file.
    FileLoadError,
}

impl ConfigErrorKind {
    /// Returns the kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::FileNotFound => "FileNotFound",
            Self::AccessDenied => "AccessDenied",
            Self::InvalidConfiguration => "InvalidConfiguration",
            Self::InvalidFileName => "InvalidFileName",
            Self::DeserializeError => "DeserializeError",
            Self::FileLoadError => "FileLoadError",
        }
    }

    /// Chooses the kind for an I/O failure while reading the file.
    ///
    /// Permission failures and Windows sharing/lock violations are
    /// `AccessDenied`; everything else is `FileLoadError`.
    #[must_use]
    pub fn from_io(error: &io::Error) -> Self {
        if error.kind() == io::ErrorKind::PermissionDenied || is_sharing_violation(error) {
            Self::AccessDenied
        } else {
            Self::FileLoadError
        }
    }
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `ERROR_SHARING_VIOLATION` (32) and `ERROR_LOCK_VIOLATION` (33).
#[cfg(windows)]
fn is_sharing_violation(error: &io::Error) -> bool {
    matches!(error.raw_os_error(), Some(32 | 33))
}

#[cfg(not(windows))]
const fn is_sharing_violation(_error: &io::Error) -> bool {
    false
}

/// Error returned by configuration loading.
pub type ConfigError = ErrorRecord<ConfigErrorKind>;
