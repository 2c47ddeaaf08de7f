//! Persisted snapshot state.
//!
//! Each (directory, pattern) query owns one state file holding the snapshot
//! captured by the most recent run. The file is missing on the first run for
//! a query; later runs replace it wholesale.

use super::{Snapshot, SnapshotIdentity};
use crate::config::StateConfig;
use crate::error::{MonitorError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Reads and replaces per-query snapshot files in a state directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    /// Directory holding the state files
    state_dir: PathBuf,
    /// Leading part of every state file name
    file_prefix: String,
    /// State file extension, without the dot
    file_extension: String,
}

impl SnapshotStore {
    /// Create a store rooted at `state_dir`, naming files per `config`.
    ///
    /// Nothing is touched on disk until the first [`save`](Self::save).
    #[must_use]
    pub fn new(state_dir: PathBuf, config: &StateConfig) -> Self {
        Self {
            state_dir,
            file_prefix: config.file_prefix.clone(),
            file_extension: config.file_extension.clone(),
        }
    }

    /// Directory holding the state files.
    #[must_use]
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// Path of the state file for `identity`.
    #[must_use]
    pub fn path_for(&self, identity: &SnapshotIdentity) -> PathBuf {
        self.state_dir.join(format!(
            "{}{}.{}",
            self.file_prefix,
            identity.key(),
            self.file_extension
        ))
    }

    /// Load the snapshot stored by the previous run, if any.
    ///
    /// A missing, unreadable, blank or malformed state file all yield
    /// `None`; the caller treats that as a first run and the next
    /// [`save`](Self::save) replaces whatever was there.
    #[must_use]
    pub fn load(&self, identity: &SnapshotIdentity) -> Option<Snapshot> {
        let path = self.path_for(identity);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no previous snapshot");
                return None;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read previous snapshot");
                return None;
            }
        };

        let content = content.trim();
        if content.is_empty() {
            debug!(path = %path.display(), "previous snapshot is blank");
            return None;
        }

        match Snapshot::from_json(content) {
            Ok(snapshot) => {
                debug!(
                    path = %path.display(),
                    files = snapshot.len(),
                    "loaded previous snapshot"
                );
                Some(snapshot)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "discarding malformed snapshot");
                None
            }
        }
    }

    /// Replace the stored snapshot for `identity`.
    ///
    /// The document is written to a temporary file in the state directory
    /// and renamed over the target, so a failed save leaves the previous
    /// state file as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state directory cannot be created ([`MonitorError::StateDirCreate`])
    /// - The state file cannot be written or replaced ([`MonitorError::StateWrite`])
    pub fn save(&self, identity: &SnapshotIdentity, snapshot: &Snapshot) -> Result<()> {
        self.ensure_state_dir()?;

        let path = self.path_for(identity);
        let write_err = |source: io::Error| MonitorError::StateWrite {
            path: path.clone(),
            source,
        };

        let document = snapshot.to_json().map_err(io::Error::from).map_err(write_err)?;

        let mut file = NamedTempFile::new_in(&self.state_dir).map_err(write_err)?;
        file.write_all(document.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        file.persist(&path).map_err(|e| write_err(e.error))?;

        debug!(path = %path.display(), files = snapshot.len(), "saved snapshot");
        Ok(())
    }

    /// Create the state directory if it does not exist yet.
    fn ensure_state_dir(&self) -> Result<()> {
        if self.state_dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(&self.state_dir).map_err(|source| MonitorError::StateDirCreate {
            path: self.state_dir.clone(),
            source,
        })?;
        debug!(path = %self.state_dir.display(), "created state directory");
        Ok(())
    }
}
