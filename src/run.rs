//! Application execution logic.
//!
//! Turns the loaded configuration into per-entry synchronization plans and
//! reports them.

use std::time::Duration;

use thiserror::Error;

use bettersync::config::{DirectoryToSync, FileToSync, SyncConfiguration};
use bettersync::exclude::{ExcludeError, ExclusionMatcher};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build exclusion rules for a directory.
    #[error("Failed to prepare exclusion rules for {source_dir}: {error}")]
    Exclusion {
        source_dir: String,
        #[source]
        error: ExcludeError,
    },
}

/// A directory entry ready for synchronization.
#[derive(Debug)]
pub struct DirectoryPlan<'a> {
    pub entry: &'a DirectoryToSync,
    pub matcher: ExclusionMatcher,
}

/// Builds a plan for every configured directory, in configuration order.
///
/// # Errors
///
/// Returns an error for the first directory whose ignore-rule file exists
/// but cannot be read.
pub fn plan_directories(config: &SyncConfiguration) -> Result<Vec<DirectoryPlan<'_>>, RunError> {
    config
        .directories_to_sync
        .iter()
        .map(|entry| {
            let matcher = entry
                .exclusion_matcher()
                .map_err(|error| RunError::Exclusion {
                    source_dir: entry.source.clone(),
                    error,
                })?;
            Ok(DirectoryPlan { entry, matcher })
        })
        .collect()
}

/// Executes the service with the given configuration.
///
/// # Errors
///
/// See [`plan_directories`].
pub fn execute(config: &SyncConfiguration) -> Result<(), RunError> {
    let plans = plan_directories(config)?;

    for plan in &plans {
        let entry = plan.entry;
        tracing::info!(
            source = %entry.source,
            destination = %entry.destination,
            recursive = entry.include_subdirectories,
            on_change = entry.sync_on_change,
            interval = %describe_interval(entry.sync_interval()),
            exclusions = plan.matcher.len(),
            "Directory sync configured"
        );
        for pattern in plan.matcher.patterns() {
            tracing::debug!(source = %entry.source, pattern, "Exclusion pattern");
        }
    }

    for entry in &config.files_to_sync {
        log_file(entry);
    }

    if plans.is_empty() && config.files_to_sync.is_empty() {
        tracing::warn!("Nothing to synchronize");
    }

    Ok(())
}

fn log_file(entry: &FileToSync) {
    tracing::info!(
        source = %entry.source,
        destination = %entry.destination,
        on_change = entry.sync_on_change,
        delay = ?entry.sync_delay,
        interval = %describe_interval(entry.sync_interval()),
        "File sync configured"
    );
}

/// Formats an optional interval for logs.
fn describe_interval(interval: Option<Duration>) -> String {
    interval.map_or_else(
        || "off".to_string(),
        |interval| format!("{}m", interval.as_secs() / 60),
    )
}
