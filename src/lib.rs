//! BetterSync: directory and file synchronization service
//!
//! Configuration subsystem of the service: command-line options,
//! configuration file discovery and loading, and glob-based exclusion
//! rules for synchronized directories.

pub mod algebra;
pub mod config;
pub mod exclude;
pub mod options;
