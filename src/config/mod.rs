//! Configuration layer for BetterSync.
//!
//! This module provides:
//! - Configuration file discovery ([`ConfigLocator`], [`SearchRoots`])
//! - JSON configuration file decoding ([`RawConfiguration`])
//! - The validated configuration tree ([`SyncConfiguration`] and its entries)
//! - Error classification ([`ConfigError`], [`ConfigErrorKind`])
//! - Default values ([`defaults`])
//!
//! # Flow
//!
//! [`ServiceOptions`](crate::options::ServiceOptions) supply an optional
//! explicit path; [`ConfigLocator::locate`] picks the first existing
//! candidate; [`SyncConfiguration::load`] reads, decodes and validates it.
//!
//! # Decoding Rules
//!
//! - Field names are matched case-insensitively (`directoriesToSync`,
//!   `DirectoriesToSync` and `directoriestosync` are the same field)
//! - Unknown fields are ignored
//! - Missing optional fields take their defaults; `null` counts as missing
//! - Every entry must have a non-blank `source` and `destination`
//! - Entry order is preserved

pub mod defaults;
mod error;
mod loader;
mod locator;
mod raw;
mod validated;

#[cfg(test)]
mod raw_tests;

pub use error::{ConfigError, ConfigErrorKind};
pub use locator::{ConfigLocator, SearchRoots};
pub use raw::{RawConfiguration, RawDirectoryToSync, RawFileToSync, RawGlobalSettings};
pub use validated::{DirectoryToSync, FileToSync, GlobalSettings, SyncConfiguration};
