//! Configuration file discovery across the default search locations.

use std::path::PathBuf;

use tracing::debug;

use crate::options::ServiceOptions;

use super::defaults;

/// Directories the locator searches, injected so lookups stay independent of
/// the process environment.
///
/// A `None` root skips the candidate that depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRoots {
    /// Working directory; also the base for a relative explicit path
    pub current_dir: Option<PathBuf>,

    /// Per-user local application data root
    pub local_data_dir: Option<PathBuf>,

    /// User's home directory
    pub home_dir: Option<PathBuf>,
}

impl SearchRoots {
    /// Resolves the roots from the running process and the platform's
    /// well-known directories.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            current_dir: std::env::current_dir().ok(),
            local_data_dir: dirs::data_local_dir(),
            home_dir: dirs::home_dir(),
        }
    }
}

/// Finds the configuration file to load.
///
/// Candidates, first existing file wins:
/// 1. The explicit path from [`ServiceOptions`], if given
/// 2. `<current_dir>/BetterSync.config.json`
/// 3. `<local_data_dir>/BetterSync/BetterSync.config.json`
/// 4. `<home_dir>/BetterSync.config.json`
///
/// Only existence is checked; file content is never read.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    roots: SearchRoots,
}

impl ConfigLocator {
    /// Creates a locator over the given roots.
    #[must_use]
    pub const fn new(roots: SearchRoots) -> Self {
        Self { roots }
    }

    /// Creates a locator over [`SearchRoots::from_env`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SearchRoots::from_env())
    }

    /// Returns the search roots.
    #[must_use]
    pub const fn roots(&self) -> &SearchRoots {
        &self.roots
    }

    /// Returns every candidate path in search order.
    #[must_use]
    pub fn candidates(&self, options: &ServiceOptions) -> Vec<PathBuf> {
        let explicit = options.config_path().map(|path| self.resolve(path));

        let current = self
            .roots
            .current_dir
            .as_deref()
            .map(|dir| dir.join(defaults::CONFIG_FILE_NAME));

        let local_data = self.roots.local_data_dir.as_deref().map(|dir| {
            dir.join(defaults::APP_FOLDER_NAME)
                .join(defaults::CONFIG_FILE_NAME)
        });

        let home = self
            .roots
            .home_dir
            .as_deref()
            .map(|dir| dir.join(defaults::CONFIG_FILE_NAME));

        [explicit, current, local_data, home]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Returns the first candidate that exists as a file, or `None`.
    #[must_use]
    pub fn locate(&self, options: &ServiceOptions) -> Option<PathBuf> {
        let found = self.candidates(options).into_iter().find(|candidate| {
            let exists = candidate.is_file();
            debug!(path = %candidate.display(), exists, "Checked configuration candidate");
            exists
        });

        if found.is_none() {
            debug!("No configuration file found in any search location");
        }

        found
    }

    /// Anchors a relative explicit path at the current directory.
    fn resolve(&self, path: PathBuf) -> PathBuf {
        match self.roots.current_dir.as_deref() {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }
}
