//! Error types for command-line option parsing.

use std::fmt;

use crate::algebra::ErrorRecord;

/// Classification of option-parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Failure that fits no other kind.
    Unknown,
    /// Token is not a recognized option.
    InvalidArgument,
    /// Option requires a value but none followed it.
    MissingArgument,
    /// Value has a quote on only one side.
    ArgumentQuotationError,
}

impl ParseErrorKind {
    /// Returns the kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::InvalidArgument => "InvalidArgument",
            Self::MissingArgument => "MissingArgument",
            Self::ArgumentQuotationError => "ArgumentQuotationError",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`OptionsParser::parse`](super::OptionsParser::parse).
pub type ParseError = ErrorRecord<ParseErrorKind>;
