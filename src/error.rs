//! Error kinds for a monitor run.
//!
//! Every failure of a run is terminal and maps onto exactly one process
//! exit code. The scheduler that invokes the probe reads both the exit code
//! and the single message line written to standard output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = MonitorError> = std::result::Result<T, E>;

/// Classified failures of a monitor run.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The command line did not carry exactly three positional arguments.
    #[error("Wrong number of parameters.")]
    InvalidArgumentCount,

    /// The filename pattern could not be turned into a matcher.
    #[error("Invalid filename pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Pattern as given on the command line.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The monitored directory is missing or cannot be listed.
    #[error("Path doesn't exist: {}", path.display())]
    DirectoryAccess {
        /// Directory that was scanned.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The state directory could not be created.
    #[error("Unable to create state directory {}: {source}", path.display())]
    StateDirCreate {
        /// State directory that was being created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The snapshot could not be written to the state file.
    #[error("Unable to write state file {}: {source}", path.display())]
    StateWrite {
        /// State file that was being replaced.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Anything not covered above.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MonitorError {
    /// Exit code for a wrong number of arguments.
    pub const EXIT_ARGUMENT_COUNT: i32 = 3;
    /// Exit code for a pattern that cannot be compiled.
    pub const EXIT_INVALID_PATTERN: i32 = 4;
    /// Exit code for a directory that cannot be listed.
    pub const EXIT_DIRECTORY_ACCESS: i32 = 15;
    /// Exit code for a state directory that cannot be created.
    pub const EXIT_STATE_DIR_CREATE: i32 = 21;
    /// Exit code for a state file that cannot be written.
    pub const EXIT_STATE_WRITE: i32 = 22;
    /// Exit code for unclassified failures.
    pub const EXIT_UNCLASSIFIED: i32 = 1;

    /// Process exit code associated with this error kind.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgumentCount => Self::EXIT_ARGUMENT_COUNT,
            Self::InvalidPattern { .. } => Self::EXIT_INVALID_PATTERN,
            Self::DirectoryAccess { .. } => Self::EXIT_DIRECTORY_ACCESS,
            Self::StateDirCreate { .. } => Self::EXIT_STATE_DIR_CREATE,
            Self::StateWrite { .. } => Self::EXIT_STATE_WRITE,
            Self::Other(_) => Self::EXIT_UNCLASSIFIED,
        }
    }

    /// Build an `InvalidPattern` error.
    pub fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
