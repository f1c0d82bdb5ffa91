//! BetterSync: directory and file synchronization service
//!
//! Entry point for the bettersync application.

use std::process::ExitCode;

use bettersync::config::{ConfigLocator, SyncConfiguration};
use bettersync::options::ServiceOptions;

mod app;
mod run;

use app::{exit_code, print_config_hint, print_search_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let options = match ServiceOptions::from_env() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Argument error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    // Locate and load configuration
    let locator = ConfigLocator::from_env();
    let Some(path) = locator.locate(&options) else {
        eprintln!("Configuration error: no configuration file found");
        print_search_hint(&locator.candidates(&options));
        return exit_code::CONFIG_ERROR;
    };

    let config = match SyncConfiguration::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(options.verbose, &config.global_settings);
    tracing::info!(path = %path.display(), "{config}");

    match run::execute(&config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
