//! Command-line interface definitions for filecheck.
//!
//! The probe takes exactly three positional arguments. The definitions are
//! shared between the main binary and the xtask man page generator.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::error::{MonitorError, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// Main CLI structure for filecheck.
#[derive(Parser, Debug)]
#[command(
    name = "filecheck",
    version = crate::VERSION,
    about = "Report whether files matching a pattern changed since the previous run",
    long_about = "One-shot probe for monitoring schedulers. Each run compares the \
                  modification times of matching files against the snapshot stored \
                  by the previous run and prints one metric line per file seen in both."
)]
pub struct Cli {
    /// "1" when the metric is enabled; any other value is accepted
    #[arg(value_name = "METRIC_STATE", allow_hyphen_values = true)]
    pub metric_state: String,

    /// Directory whose entries are checked
    #[arg(value_name = "DIRECTORY", allow_hyphen_values = true)]
    pub directory: PathBuf,

    /// File name to check; `*` matches any sequence of characters
    #[arg(value_name = "FILENAME_PATTERN", allow_hyphen_values = true)]
    pub pattern: String,
}

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorRequest {
    /// Whether the scheduler marked the metric as enabled
    pub metric_enabled: bool,
    /// Directory to scan, exactly as given
    pub directory: PathBuf,
    /// Filename pattern before wildcard handling
    pub pattern: String,
}

impl MonitorRequest {
    /// Build a request from the raw positional values.
    ///
    /// A leading double quote on `metric_state` is ignored, as some
    /// schedulers pass it through unbalanced.
    pub fn new(
        metric_state: &str,
        directory: impl Into<PathBuf>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            metric_enabled: metric_state.replacen('"', "", 1) == "1",
            directory: directory.into(),
            pattern: pattern.into(),
        }
    }
}

impl From<Cli> for MonitorRequest {
    fn from(cli: Cli) -> Self {
        Self::new(&cli.metric_state, cli.directory, cli.pattern)
    }
}

/// Result of parsing a command line.
#[derive(Debug)]
pub enum Invocation {
    /// Run the monitor
    Run(MonitorRequest),
    /// `--help` or `--version`; print it and exit successfully
    Info(clap::Error),
}

/// Parse a full argument list (program name first).
///
/// # Errors
///
/// Returns [`MonitorError::InvalidArgumentCount`] for any command line
/// that does not carry exactly the three positional arguments.
pub fn parse_request<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli.into())),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Info(e))
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "rejected command line");
            Err(MonitorError::InvalidArgumentCount)
        }
    }
}
