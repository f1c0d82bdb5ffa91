//! Path exclusion from `.gitignore`-style rule files.
//!
//! # Design
//!
//! - **Glob**: [`Glob`] translates one wildcard pattern (`*` = any run of
//!   characters, `?` = any single character) into an anchored regex. The
//!   match is a flat string match over the whole candidate; `/` has no
//!   special meaning.
//! - **Matcher**: [`ExclusionMatcher`] holds the ordered patterns of one rule
//!   file. A candidate is excluded if ANY pattern matches.
//!
//! Negation (`!pattern`) and directory-only rules (`dir/`) are not
//! interpreted; such lines are matched literally.

mod error;
mod glob;
mod matcher;


pub use error::ExcludeError;
pub use glob::Glob;
pub use matcher::ExclusionMatcher;
