//! JSON configuration file decoding.
//!
//! Defines the on-disk shape of the configuration document with serde.
//! Field names are matched case-insensitively: every object key is
//! lower-cased before deserialization, so each field is renamed to its
//! lower-case JSON name.

use serde::Deserialize;
use serde_json::{Map, Value};

/// UTF-8 byte order mark, tolerated at the start of the file.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Root configuration structure from the JSON file.
///
/// All fields are optional; defaults and required-field checks are applied
/// when converting to [`SyncConfiguration`](super::SyncConfiguration).
/// Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfiguration {
    /// Global settings section
    #[serde(rename = "globalsettings")]
    pub global_settings: Option<RawGlobalSettings>,

    /// Directory entries, in file order
    #[serde(rename = "directoriestosync")]
    pub directories_to_sync: Option<Vec<RawDirectoryToSync>>,

    /// File entries, in file order
    #[serde(rename = "filestosync")]
    pub files_to_sync: Option<Vec<RawFileToSync>>,
}

/// Global settings section.
#[derive(Debug, Default, Deserialize)]
pub struct RawGlobalSettings {
    /// Log level name
    #[serde(rename = "loglevel")]
    pub log_level: Option<String>,

    /// Whether configuration changes are picked up at runtime
    #[serde(rename = "reloadconfigenabled")]
    pub reload_config_enabled: Option<bool>,
}

/// One `directoriesToSync` entry.
#[derive(Debug, Default, Deserialize)]
pub struct RawDirectoryToSync {
    /// Source directory (required)
    pub source: Option<String>,

    /// Destination directory (required)
    pub destination: Option<String>,

    /// Recurse into subdirectories
    #[serde(rename = "includesubdirectories")]
    pub include_subdirectories: Option<bool>,

    /// Synchronize when the source changes
    #[serde(rename = "synconchange")]
    pub sync_on_change: Option<bool>,

    /// Periodic synchronization interval in minutes
    #[serde(rename = "syncintervalminutes")]
    pub sync_interval_minutes: Option<i32>,

    /// Honor the source directory's ignore-rule file
    #[serde(rename = "enablegitignore")]
    pub enable_git_ignore: Option<bool>,

    /// Glob of files to include
    #[serde(rename = "filemask")]
    pub file_mask: Option<String>,

    /// Glob of files to exclude
    #[serde(rename = "excludemask")]
    pub exclude_mask: Option<String>,
}

/// One `filesToSync` entry.
#[derive(Debug, Default, Deserialize)]
pub struct RawFileToSync {
    /// Source file (required)
    pub source: Option<String>,

    /// Destination file (required)
    pub destination: Option<String>,

    /// Synchronize when the source changes
    #[serde(rename = "synconchange")]
    pub sync_on_change: Option<bool>,

    /// Delay before synchronizing after a change
    #[serde(rename = "syncdelay")]
    pub sync_delay: Option<i32>,

    /// Periodic synchronization interval in minutes
    #[serde(rename = "syncintervalminutes")]
    pub sync_interval_minutes: Option<i32>,
}

impl RawConfiguration {
    /// Decodes a configuration document from raw file bytes.
    ///
    /// Returns `Ok(None)` when the document is the JSON literal `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid UTF-8 JSON or do not fit
    /// the schema.
    pub fn from_slice(bytes: &[u8]) -> Result<Option<Self>, serde_json::Error> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Decodes a configuration document from a string.
    ///
    /// # Errors
    ///
    /// See [`Self::from_slice`].
    pub fn parse(content: &str) -> Result<Option<Self>, serde_json::Error> {
        Self::from_slice(content.as_bytes())
    }

    fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error> {
        if value.is_null() {
            return Ok(None);
        }

        serde_json::from_value(lowercase_keys(value)).map(Some)
    }
}

/// Lower-cases every object key, recursively.
///
/// Keys that differ only by case collapse into one entry.
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
