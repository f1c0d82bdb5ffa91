//! Validated configuration tree.
//!
//! This module contains the final configuration used by the service. All
//! defaults are applied and required fields are checked during
//! construction from the raw document.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::Level;

use crate::algebra::present;
use crate::exclude::{ExcludeError, ExclusionMatcher};

use super::defaults;
use super::error::{ConfigError, ConfigErrorKind};
use super::raw::{RawConfiguration, RawDirectoryToSync, RawFileToSync, RawGlobalSettings};

/// Root of the configuration tree.
///
/// Entry order matches the order in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncConfiguration {
    /// Service-wide settings
    pub global_settings: GlobalSettings,

    /// Directories to synchronize
    pub directories_to_sync: Vec<DirectoryToSync>,

    /// Individual files to synchronize
    pub files_to_sync: Vec<FileToSync>,
}

/// Service-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettings {
    /// Log level name, e.g. `Info` or `Debug`
    pub log_level: String,

    /// Whether configuration changes are picked up at runtime
    pub reload_config_enabled: bool,
}

/// A directory synchronization entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToSync {
    /// Source directory
    pub source: String,

    /// Destination directory
    pub destination: String,

    /// Recurse into subdirectories (default: true)
    pub include_subdirectories: bool,

    /// Synchronize when the source changes (default: false)
    pub sync_on_change: bool,

    /// Periodic synchronization interval in minutes
    pub sync_interval_minutes: Option<i32>,

    /// Honor the source directory's ignore-rule file
    pub enable_git_ignore: Option<bool>,

    /// Glob of files to include
    pub file_mask: Option<String>,

    /// Glob of files to exclude
    pub exclude_mask: Option<String>,
}

/// A single-file synchronization entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToSync {
    /// Source file
    pub source: String,

    /// Destination file
    pub destination: String,

    /// Synchronize when the source changes (default: false)
    pub sync_on_change: bool,

    /// Delay before synchronizing after a change
    pub sync_delay: Option<i32>,

    /// Periodic synchronization interval in minutes
    pub sync_interval_minutes: Option<i32>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            log_level: defaults::LOG_LEVEL.to_string(),
            reload_config_enabled: defaults::RELOAD_CONFIG_ENABLED,
        }
    }
}

impl fmt::Display for SyncConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ log_level: {}, reload_config: {}, directories: {}, files: {} }}",
            self.global_settings.log_level,
            self.global_settings.reload_config_enabled,
            self.directories_to_sync.len(),
            self.files_to_sync.len(),
        )
    }
}

impl SyncConfiguration {
    /// Creates a validated configuration from a decoded document.
    ///
    /// Missing optional fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::InvalidConfiguration`] if an entry has no
    /// `source` or `destination`, or a blank one.
    pub fn from_raw(raw: RawConfiguration) -> Result<Self, ConfigError> {
        let global_settings = raw
            .global_settings
            .map(GlobalSettings::from_raw)
            .unwrap_or_default();

        let directories_to_sync = raw
            .directories_to_sync
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| DirectoryToSync::from_raw(entry, index))
            .collect::<Result<Vec<_>, _>>()?;

        let files_to_sync = raw
            .files_to_sync
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| FileToSync::from_raw(entry, index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            global_settings,
            directories_to_sync,
            files_to_sync,
        })
    }
}

impl GlobalSettings {
    fn from_raw(raw: RawGlobalSettings) -> Self {
        Self {
            log_level: raw
                .log_level
                .unwrap_or_else(|| defaults::LOG_LEVEL.to_string()),
            reload_config_enabled: raw
                .reload_config_enabled
                .unwrap_or(defaults::RELOAD_CONFIG_ENABLED),
        }
    }

    /// Maps the configured log level name to a tracing level.
    ///
    /// Accepts `Trace`, `Debug`, `Info`/`Information`, `Warn`/`Warning` and
    /// `Error`/`Critical`, ignoring case. Returns `None` for anything else.
    #[must_use]
    pub fn tracing_level(&self) -> Option<Level> {
        match self.log_level.trim().to_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" | "information" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" | "critical" => Some(Level::ERROR),
            _ => None,
        }
    }
}

impl DirectoryToSync {
    fn from_raw(raw: RawDirectoryToSync, index: usize) -> Result<Self, ConfigError> {
        let section = "directoriesToSync";

        Ok(Self {
            source: required(raw.source, section, index, "source")?,
            destination: required(raw.destination, section, index, "destination")?,
            include_subdirectories: raw
                .include_subdirectories
                .unwrap_or(defaults::INCLUDE_SUBDIRECTORIES),
            sync_on_change: raw.sync_on_change.unwrap_or(defaults::SYNC_ON_CHANGE),
            sync_interval_minutes: raw.sync_interval_minutes,
            enable_git_ignore: raw.enable_git_ignore,
            file_mask: raw.file_mask.and_then(present),
            exclude_mask: raw.exclude_mask.and_then(present),
        })
    }

    /// Returns the source directory as a path.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        Path::new(&self.source)
    }

    /// Returns the ignore-rule file inside the source directory.
    #[must_use]
    pub fn ignore_file(&self) -> PathBuf {
        self.source_path().join(defaults::IGNORE_FILE_NAME)
    }

    /// Returns true if the ignore-rule file should be honored.
    #[must_use]
    pub fn git_ignore_enabled(&self) -> bool {
        self.enable_git_ignore == Some(true)
    }

    /// Returns the periodic synchronization interval, if a positive one is set.
    #[must_use]
    pub fn sync_interval(&self) -> Option<Duration> {
        self.sync_interval_minutes.and_then(minutes)
    }

    /// Builds the exclusion matcher for this directory.
    ///
    /// Includes the ignore-rule file's patterns when
    /// [`git_ignore_enabled`](Self::git_ignore_enabled), followed by
    /// `exclude_mask` when set.
    ///
    /// # Errors
    ///
    /// Returns an error if the ignore-rule file exists but cannot be read.
    pub fn exclusion_matcher(&self) -> Result<ExclusionMatcher, ExcludeError> {
        let matcher = if self.git_ignore_enabled() {
            ExclusionMatcher::load(&self.ignore_file())?
        } else {
            ExclusionMatcher::default()
        };

        Ok(match self.exclude_mask {
            Some(ref mask) => matcher.with_pattern(mask),
            None => matcher,
        })
    }
}

impl FileToSync {
    fn from_raw(raw: RawFileToSync, index: usize) -> Result<Self, ConfigError> {
        let section = "filesToSync";

        Ok(Self {
            source: required(raw.source, section, index, "source")?,
            destination: required(raw.destination, section, index, "destination")?,
            sync_on_change: raw.sync_on_change.unwrap_or(defaults::SYNC_ON_CHANGE),
            sync_delay: raw.sync_delay,
            sync_interval_minutes: raw.sync_interval_minutes,
        })
    }

    /// Returns the source file as a path.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        Path::new(&self.source)
    }

    /// Returns the periodic synchronization interval, if a positive one is set.
    #[must_use]
    pub fn sync_interval(&self) -> Option<Duration> {
        self.sync_interval_minutes.and_then(minutes)
    }
}

// Helper functions

fn required(
    value: Option<String>,
    section: &str,
    index: usize,
    field: &str,
) -> Result<String, ConfigError> {
    value.and_then(present).ok_or_else(|| {
        ConfigError::new(
            ConfigErrorKind::InvalidConfiguration,
            format!("{section}[{index}].{field} is required"),
        )
    })
}

/// Converts a minute count to a duration; non-positive counts disable the interval.
fn minutes(count: i32) -> Option<Duration> {
    u64::try_from(count)
        .ok()
        .filter(|count| *count > 0)
        .map(|count| Duration::from_secs(count * 60))
}
