//! Loading the configuration file from disk.
//!
//! Every failure is classified into a [`ConfigErrorKind`]:
//!
//! | failure                                   | kind                   |
//! |-------------------------------------------|------------------------|
//! | empty or blank path                       | `InvalidFileName`      |
//! | path does not exist or is not a file      | `FileNotFound`         |
//! | permission or sharing violation on read   | `AccessDenied`         |
//! | any other I/O failure                     | `FileLoadError`        |
//! | malformed JSON or schema mismatch         | `DeserializeError`     |
//! | document is `null`                        | `FileLoadError`        |
//! | entry without `source`/`destination`      | `InvalidConfiguration` |

use std::io;
use std::path::Path;

use tracing::debug;

use super::error::{ConfigError, ConfigErrorKind};
use super::raw::RawConfiguration;
use super::validated::SyncConfiguration;

impl SyncConfiguration {
    /// Loads and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] classified as described in the module docs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if path.to_string_lossy().trim().is_empty() {
            return Err(ConfigError::new(
                ConfigErrorKind::InvalidFileName,
                "Configuration file name is empty or blank",
            ));
        }

        match std::fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => return Err(not_found(path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found(path)),
            Err(e) => return Err(read_error(path, e)),
        }

        let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
        let config = Self::decode(&bytes, &path.display().to_string())?;

        debug!(
            path = %path.display(),
            directories = config.directories_to_sync.len(),
            files = config.files_to_sync.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Decodes and validates a configuration document held in memory.
    ///
    /// # Errors
    ///
    /// Returns `DeserializeError`, `FileLoadError` (for a `null` document) or
    /// `InvalidConfiguration`.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::decode(content.as_bytes(), "<inline>")
    }

    fn decode(bytes: &[u8], origin: &str) -> Result<Self, ConfigError> {
        let raw = RawConfiguration::from_slice(bytes)
            .map_err(|e| {
                ConfigError::with_cause(
                    ConfigErrorKind::DeserializeError,
                    format!("Failed to deserialize configuration file: {origin}"),
                    e,
                )
            })?
            .ok_or_else(|| {
                ConfigError::new(
                    ConfigErrorKind::FileLoadError,
                    format!("Configuration is null: {origin}"),
                )
            })?;

        Self::from_raw(raw).map_err(|e| {
            ConfigError::new(
                *e.kind(),
                format!("Invalid configuration file {origin}: {}", e.message()),
            )
        })
    }
}

fn not_found(path: &Path) -> ConfigError {
    ConfigError::new(
        ConfigErrorKind::FileNotFound,
        format!("File not found: {}", path.display()),
    )
}

fn read_error(path: &Path, error: io::Error) -> ConfigError {
    let kind = ConfigErrorKind::from_io(&error);
    let message = match kind {
        ConfigErrorKind::AccessDenied => {
            format!("Access denied or file in use: {}", path.display())
        }
        _ => format!("Failed to load configuration file: {}", path.display()),
    };

    ConfigError::with_cause(kind, message, error)
}
