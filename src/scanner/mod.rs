//! Directory snapshotting.
//!
//! The `DirectorySnapshotter` lists the immediate entries of a directory and
//! records every non-directory entry whose name matches a
//! [`FilenamePattern`]. Nothing below the directory is visited.

use crate::error::{MonitorError, Result};
use crate::pattern::FilenamePattern;
use crate::storage::{FileObservation, Snapshot};
use crate::utils::time;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{Level, debug, span, warn};
use walkdir::WalkDir;

/// Builds snapshots of the entries of a directory that match a pattern
#[derive(Debug, Clone)]
pub struct DirectorySnapshotter {
    /// Pattern entry names must match
    pattern: FilenamePattern,
}

impl DirectorySnapshotter {
    /// Create a snapshotter for `pattern`
    #[must_use]
    pub const fn new(pattern: FilenamePattern) -> Self {
        Self { pattern }
    }

    /// The pattern this snapshotter matches against
    #[must_use]
    pub const fn pattern(&self) -> &FilenamePattern {
        &self.pattern
    }

    /// Capture the matching entries of `directory` in listing order.
    ///
    /// Directories are skipped even when their name matches; symbolic links
    /// are judged by what they point to. Entries that disappear between the
    /// listing and the metadata lookup are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::DirectoryAccess`] if:
    /// - `directory` does not exist or is not a directory
    /// - The directory cannot be listed
    pub fn capture(&self, directory: &Path) -> Result<Snapshot> {
        let _span = span!(Level::DEBUG, "capture", directory = %directory.display()).entered();

        let access_err = |source: io::Error| MonitorError::DirectoryAccess {
            path: directory.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(directory).map_err(access_err)?;
        if !metadata.is_dir() {
            return Err(access_err(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            )));
        }

        let mut snapshot = Snapshot::new();

        for entry in WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry.map_err(|e| access_err(e.into()))?;

            let Some(name) = entry.file_name().to_str() else {
                debug!(entry = ?entry.file_name(), "skipping non UTF-8 name");
                continue;
            };

            if !self.pattern.matches(name) {
                continue;
            }

            let modified = match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => {
                    debug!(file = name, "skipping directory");
                    continue;
                }
                Ok(meta) => meta.modified(),
                Err(e) => Err(e),
            };

            let modified = match modified {
                Ok(modified) => modified,
                Err(e) => {
                    warn!(file = name, error = %e, "skipping entry without metadata");
                    continue;
                }
            };

            match time::epoch_millis(modified) {
                Some(millis) => {
                    snapshot.push(FileObservation::new(name, millis, time::now_iso8601()));
                }
                None => warn!(file = name, ?modified, "skipping entry with out of range mtime"),
            }
        }

        debug!(files = snapshot.len(), "captured snapshot");
        Ok(snapshot)
    }
}
