//! Kind-tagged error record.

use std::fmt;

use thiserror::Error;

/// Boxed underlying error carried as the cause of an [`ErrorRecord`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A classified failure: a closed `kind`, a human-readable message and an
/// optional underlying cause.
///
/// `K` is a subsystem-specific enum such as
/// [`ParseErrorKind`](crate::options::ParseErrorKind) or
/// [`ConfigErrorKind`](crate::config::ConfigErrorKind).
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ErrorRecord<K>
where
    K: fmt::Debug + fmt::Display,
{
    kind: K,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

impl<K> ErrorRecord<K>
where
    K: fmt::Debug + fmt::Display,
{
    /// Creates a record without an underlying cause.
    pub fn new(kind: K, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a record wrapping the error that triggered it.
    pub fn with_cause(
        kind: K,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Returns the error kind.
    pub const fn kind(&self) -> &K {
        &self.kind
    }

    /// Returns the message describing the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause, if one was recorded.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
