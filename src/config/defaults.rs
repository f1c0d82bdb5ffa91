//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// File name searched for in every default location.
pub const CONFIG_FILE_NAME: &str = "BetterSync.config.json";

/// Tool-specific folder under the per-user local application data root.
pub const APP_FOLDER_NAME: &str = "BetterSync";

/// Ignore-rule file looked up in a synchronized directory's source.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Default log level name.
pub const LOG_LEVEL: &str = "Info";

/// Configuration reload is enabled unless turned off.
pub const RELOAD_CONFIG_ENABLED: bool = true;

/// Directories are synchronized recursively unless turned off.
pub const INCLUDE_SUBDIRECTORIES: bool = true;

/// Entries are not synchronized on change unless turned on.
pub const SYNC_ON_CHANGE: bool = false;
