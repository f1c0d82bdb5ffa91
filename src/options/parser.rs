//! Dispatch-table parser for the service's command-line arguments.

use std::collections::{HashMap, VecDeque};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::algebra::present;

use super::error::{ParseError, ParseErrorKind};

/// Options resolved from one process invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Configuration file name exactly as given after `-f`/`--file` (trimmed).
    ///
    /// Symmetric surrounding quotes are kept; use [`Self::config_path`] for
    /// a path suitable for filesystem access.
    pub config_file_name: Option<String>,

    /// Verbose logging requested.
    pub verbose: bool,
}

impl ServiceOptions {
    /// Parses options from an argument list that excludes the program name.
    ///
    /// # Errors
    ///
    /// Returns the first parse failure; see [`OptionsParser::parse`].
    pub fn parse<I, S>(args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionsParser::new().parse(args)
    }

    /// Parses options from OS-encoded arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::Unknown`] for an argument that is not valid
    /// Unicode, otherwise the first failure reported by [`OptionsParser::parse`].
    pub fn parse_os<I>(args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| {
                arg.into_string().map_err(|raw| {
                    ParseError::new(
                        ParseErrorKind::Unknown,
                        format!("Argument is not valid unicode: {}", raw.to_string_lossy()),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::parse(args)
    }

    /// Parses the arguments of the running process.
    ///
    /// # Errors
    ///
    /// See [`Self::parse_os`].
    pub fn from_env() -> Result<Self, ParseError> {
        Self::parse_os(std::env::args_os().skip(1))
    }

    /// Returns the explicit configuration path with one pair of surrounding
    /// quotes removed, or `None` when no usable name was given.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_file_name
            .as_deref()
            .and_then(present)
            .map(strip_symmetric_quotes)
            .and_then(present)
            .map(PathBuf::from)
    }
}

/// Handler invoked for a recognized option token.
///
/// Receives the options being built, the token that selected it, and the
/// remaining arguments so it can consume the option's value.
type ArgumentHandler =
    fn(&mut ServiceOptions, &str, &mut VecDeque<String>) -> Result<(), ParseError>;

/// Command-line parser mapping each option alias to its handler.
///
/// # Examples
///
/// ```
/// use bettersync::options::OptionsParser;
///
/// let options = OptionsParser::new().parse(["-f", "sync.json", "-v"]).unwrap();
///
/// assert_eq!(options.config_file_name.as_deref(), Some("sync.json"));
/// assert!(options.verbose);
/// ```
#[derive(Debug, Clone)]
pub struct OptionsParser {
    handlers: HashMap<&'static str, ArgumentHandler>,
}

impl Default for OptionsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsParser {
    /// Creates a parser with the `--file` and `--verbose` options registered.
    #[must_use]
    pub fn new() -> Self {
        let mut parser = Self {
            handlers: HashMap::new(),
        };
        parser.add_option("-f|--file", parse_file_argument);
        parser.add_option("-v|--verbose", parse_verbose_argument);
        parser
    }

    /// Registers `handler` under every `|`-separated alias in `aliases`.
    fn add_option(&mut self, aliases: &'static str, handler: ArgumentHandler) {
        for alias in aliases.split('|') {
            self.handlers.insert(alias.trim(), handler);
        }
    }

    fn find_handler(&self, token: &str) -> Option<ArgumentHandler> {
        self.handlers.get(token.trim()).copied()
    }

    /// Returns true if `token` selects a registered option.
    #[must_use]
    pub fn recognizes(&self, token: &str) -> bool {
        self.find_handler(token).is_some()
    }

    /// Parses `args` into [`ServiceOptions`].
    ///
    /// Tokens are consumed front to back; an option's handler may consume the
    /// tokens that follow it. Parsing stops at the first failure.
    ///
    /// # Errors
    ///
    /// - [`ParseErrorKind::InvalidArgument`] for an unrecognized token
    /// - [`ParseErrorKind::MissingArgument`] when `--file` has no value
    /// - [`ParseErrorKind::ArgumentQuotationError`] when the value has a quote
    ///   on only one side
    pub fn parse<I, S>(&self, args: I) -> Result<ServiceOptions, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue: VecDeque<String> = args.into_iter().map(Into::into).collect();
        let mut options = ServiceOptions::default();

        while let Some(token) = queue.pop_front() {
            let Some(handler) = self.find_handler(&token) else {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidArgument,
                    format!("Invalid or unknown argument: {token}"),
                ));
            };

            handler(&mut options, &token, &mut queue)?;
        }

        Ok(options)
    }
}

fn parse_file_argument(
    options: &mut ServiceOptions,
    option: &str,
    queue: &mut VecDeque<String>,
) -> Result<(), ParseError> {
    let Some(file_name) = queue.pop_front() else {
        return Err(ParseError::new(
            ParseErrorKind::MissingArgument,
            format!("Missing filename for option '{option}'"),
        ));
    };

    let file_name = file_name.trim();
    let starts_quoted = file_name.starts_with('"');
    let ends_quoted = file_name.ends_with('"');

    if starts_quoted && !ends_quoted {
        return Err(ParseError::new(
            ParseErrorKind::ArgumentQuotationError,
            format!("Quotation error for option '{option}'; filename begins with a quote but does not end with one"),
        ));
    }
    if ends_quoted && !starts_quoted {
        return Err(ParseError::new(
            ParseErrorKind::ArgumentQuotationError,
            format!("Quotation error for option '{option}'; filename ends with a quote but does not begin with one"),
        ));
    }

    options.config_file_name = Some(file_name.to_string());
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Signature fixed by ArgumentHandler
fn parse_verbose_argument(
    options: &mut ServiceOptions,
    _option: &str,
    _queue: &mut VecDeque<String>,
) -> Result<(), ParseError> {
    options.verbose = true;
    Ok(())
}

/// Removes one pair of surrounding double quotes, if both are present.
fn strip_symmetric_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}
