#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # filecheck - File Change Checker Probe
//!
//! filecheck is a one-shot probe for periodic monitoring schedulers. Each
//! invocation lists a directory, keeps the entries whose names match a
//! wildcard pattern, and compares their modification times with the
//! snapshot stored by the previous invocation for the same query.
//!
//! ## Output
//!
//! One line per file present in both runs:
//!
//! ```text
//! 1470:File Status:9|0|a.txt|
//! 1470:File Status:9|1|b.txt|
//! ```
//!
//! `0` means the file changed, `1` means it did not. The first run for a
//! query only stores a baseline and prints nothing.
//!
//! ## Architecture
//!
//! - [`pattern`]: Wildcard filename patterns
//! - [`scanner`]: Directory snapshots
//! - [`storage`]: Snapshot data model and the persisted state store
//! - [`detector`]: Snapshot comparison
//! - [`output`]: Metric line formatting
//! - [`commands`]: The run itself, tying the above together
//! - [`config`]: Configuration loading
//! - [`error`]: Error kinds and exit codes
//!
//! ## Example Usage
//!
//! ```no_run
//! use filecheck::MonitorContext;
//! use filecheck::cli::MonitorRequest;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = MonitorContext::new()?;
//! let request = MonitorRequest::new("1", "/var/log/app", "*.log");
//! filecheck::commands::check::execute(&ctx, &request, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// The monitor run.
pub mod commands;

/// Configuration loading and defaults.
pub mod config;

/// Comparison of the current snapshot against the stored one.
pub mod detector;

/// Error kinds and their exit codes.
pub mod error;

/// Metric line output.
pub mod output;

/// Wildcard filename patterns.
pub mod pattern;

/// Directory snapshots.
pub mod scanner;

/// Snapshot data model and persisted state.
pub mod storage;

/// Utility functions and helpers.
pub mod utils;

use anyhow::Result;
use std::path::PathBuf;

/// Current version of the filecheck binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "FILECHECK_CONFIG_PATH";

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "FILECHECK_STATE_DIR";

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "FILECHECK_LOG";

/// Everything a run needs besides the request itself.
///
/// # Fields
///
/// - `state_dir`: Directory holding the per-query snapshot files
/// - `config`: Loaded configuration
#[derive(Debug, Clone)]
pub struct MonitorContext {
    /// Resolved state directory.
    pub state_dir: PathBuf,

    /// Loaded configuration settings.
    pub config: config::MonitorConfig,
}

impl MonitorContext {
    /// Creates a context anchored at the directory of the running executable.
    ///
    /// The configuration file is `filecheck.toml` in that directory unless
    /// `FILECHECK_CONFIG_PATH` points elsewhere; the state directory comes
    /// from the configuration unless `FILECHECK_STATE_DIR` is set.
    ///
    /// # Errors
    /// Returns an error if the executable location cannot be determined or
    /// if the configuration file exists but cannot be read or parsed.
    pub fn new() -> Result<Self> {
        let install_dir = utils::paths::install_dir()?;

        let config_path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => install_dir.join(config::CONFIG_FILE),
        };
        let config = config::MonitorConfig::load(&config_path)?;

        let state_dir = match std::env::var_os(STATE_DIR_ENV) {
            Some(path) => PathBuf::from(path),
            None => utils::paths::resolve_against(&install_dir, &config.state.dir),
        };

        Ok(Self { state_dir, config })
    }

    /// Creates a context from explicit values, for tests and embedding.
    #[must_use]
    pub const fn new_explicit(state_dir: PathBuf, config: config::MonitorConfig) -> Self {
        Self { state_dir, config }
    }
}
