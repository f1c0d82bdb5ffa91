//! Command-line options for the BetterSync service.
//!
//! The grammar is intentionally small:
//!
//! | token(s)              | effect                               |
//! |-----------------------|--------------------------------------|
//! | `-f`, `--file <path>` | explicit configuration file path     |
//! | `-v`, `--verbose`     | verbose logging                      |
//!
//! Tokens are matched exactly (after trimming) against a dispatch table;
//! the first unknown token aborts parsing with
//! [`ParseErrorKind::InvalidArgument`].

mod error;
mod parser;


pub use error::{ParseError, ParseErrorKind};
pub use parser::{OptionsParser, ServiceOptions};
